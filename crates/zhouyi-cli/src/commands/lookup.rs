use std::path::Path;

use colored::Colorize;
use zhouyi_core::{Catalog, CatalogEntry, CoreResult, Signature};

pub fn run(key: &str, data: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;
    let entry = find_entry(&catalog, key).map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        entry.name.bold(),
        format!("(hexagram {})", entry.number).dimmed()
    );
    println!(
        "  above {}, below {}",
        entry.upper_trigram, entry.lower_trigram
    );
    println!("  {} {}", "signature:".dimmed(), entry.binary);
    println!();
    println!("  {}", entry.description);
    println!();
    for (index, text) in entry.line_texts.iter().enumerate() {
        println!("  {} {text}", format!("line {}:", index + 1).dimmed());
    }

    Ok(())
}

/// A six-character run of '0'/'1' is a signature, a numeric key is a
/// hexagram number, anything else is a name (matched case-insensitively).
/// The signature parse runs first: keys like "000001" are valid digit
/// strings too, and a catalog number is never six digits long.
fn find_entry<'a>(catalog: &'a Catalog, key: &str) -> CoreResult<&'a CatalogEntry> {
    if let Ok(signature) = key.parse::<Signature>() {
        return catalog.lookup_by_signature(signature);
    }
    if let Ok(number) = key.parse::<u8>() {
        return catalog.lookup_by_number(number);
    }
    catalog.lookup_by_name(key)
}

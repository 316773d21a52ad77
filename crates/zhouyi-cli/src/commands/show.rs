use std::path::Path;

use colored::Colorize;
use zhouyi_history::{HistoryEntry, HistoryStore, RecordId};

pub fn run(id: &str, file: &Path) -> Result<(), String> {
    let store = HistoryStore::new(file);

    let entry = match id.parse::<RecordId>() {
        Ok(id) => store.get_by_id(id).map_err(|e| e.to_string())?,
        Err(_) => find_by_prefix(&store, id)?,
    };

    println!("  {}", entry.summary().bold());
    println!();
    println!("  {}       {}", "id:".dimmed(), entry.id);
    println!(
        "  {}     {}",
        "time:".dimmed(),
        entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let question = if entry.question.is_empty() {
        "—".to_string()
    } else {
        entry.question.clone()
    };
    println!("  {} {question}", "question:".dimmed());
    println!();
    println!(
        "  {} {} [{}]",
        "original:".dimmed(),
        entry.original.name,
        entry.original.signature
    );
    match &entry.resulting {
        Some(resulting) => println!(
            "  {} {} [{}]",
            "resulting:".dimmed(),
            resulting.name,
            resulting.signature
        ),
        None => println!("  {} none (no changing lines)", "resulting:".dimmed()),
    }

    Ok(())
}

/// The history table prints 8-character short ids; accept any prefix of a
/// full UUID as long as it names exactly one record.
fn find_by_prefix(store: &HistoryStore, prefix: &str) -> Result<HistoryEntry, String> {
    let looks_like_prefix = !prefix.is_empty()
        && prefix.len() < 36
        && prefix
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == '-');
    if !looks_like_prefix {
        return Err(format!("invalid record id: \"{prefix}\""));
    }

    let mut matches = store
        .list_all()
        .map_err(|e| e.to_string())?
        .into_iter()
        .filter(|entry| entry.id.to_string().starts_with(prefix));

    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry),
        (Some(_), Some(_)) => Err(format!("ambiguous record id prefix: \"{prefix}\"")),
        (None, _) => Err(format!("record not found: {prefix}")),
    }
}

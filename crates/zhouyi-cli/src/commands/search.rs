use std::path::Path;

use zhouyi_history::HistoryStore;

pub fn run(keyword: &str, file: &Path) -> Result<(), String> {
    let store = HistoryStore::new(file);
    let entries = store.search(keyword).map_err(|e| e.to_string())?;

    if entries.is_empty() {
        println!("  No results for \"{keyword}\".");
        return Ok(());
    }

    println!(
        "  {} result{} for \"{keyword}\":",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );
    println!();
    println!("{}", super::history_table(&entries));

    Ok(())
}

use std::path::Path;

use zhouyi_history::HistoryStore;

pub fn run(file: &Path) -> Result<(), String> {
    let store = HistoryStore::new(file);
    let entries = store.list_all().map_err(|e| e.to_string())?;

    if entries.is_empty() {
        println!("  No castings recorded.");
        return Ok(());
    }

    println!("{}", super::history_table(&entries));
    println!();
    println!(
        "  {} casting{}",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

use std::path::Path;

use colored::Colorize;
use zhouyi_core::{CastingConfig, CastingService};
use zhouyi_history::HistoryStore;

pub fn run(
    question: &str,
    seed: Option<u64>,
    save: bool,
    file: &Path,
    data: Option<&Path>,
) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;
    let mut config = CastingConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut service = CastingService::new(catalog, config);

    let result = service.cast(question).map_err(|e| e.to_string())?;

    if !result.question.is_empty() {
        println!("  {} {}", "Question:".dimmed(), result.question);
    }
    println!(
        "  {} {}",
        "Time:".dimmed(),
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    println!("  {}", "Original hexagram".underline());
    super::print_reading(&result.original, true);

    if result.has_changes() {
        println!();
        println!("  {}", "Changing lines".underline());
        for line in &result.changing_lines {
            let title = super::line_title(line);
            let text = result
                .original
                .entry
                .line_texts
                .get(usize::from(line.position) - 1)
                .map(String::as_str)
                .unwrap_or_default();
            println!("    {} — {text}", title.bold());
        }

        if let Some(resulting) = &result.resulting {
            println!();
            println!("  {}", "Resulting hexagram".underline());
            super::print_reading(resulting, false);
        }
    } else {
        println!();
        println!("  No changing lines; the original judgment stands alone.");
    }

    if save {
        // A failed save is a warning, not a failure: the casting above is
        // already complete and printed.
        let store = HistoryStore::new(file);
        match store.append(&result) {
            Ok(id) => {
                println!();
                println!("  Saved as {id}");
            }
            Err(e) => eprintln!("warning: casting not saved: {e}"),
        }
    }

    Ok(())
}

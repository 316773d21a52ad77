pub mod cast;
pub mod history;
pub mod lookup;
pub mod search;
pub mod show;

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use zhouyi_core::{Catalog, HexagramReading, Line, Polarity};
use zhouyi_history::HistoryEntry;

/// Load the bundled catalog, or a caller-supplied dataset file.
fn load_catalog(data: Option<&Path>) -> Result<Catalog, String> {
    let catalog = match data {
        Some(path) => Catalog::from_path(path),
        None => Catalog::bundled(),
    };
    catalog.map_err(|e| e.to_string())
}

/// Traditional title of a line: "Nine" for yang, "Six" for yin, with the
/// position spelled out ("Nine at the beginning", "Six in the third place",
/// "Nine at the top").
fn line_title(line: &Line) -> String {
    let polarity = match line.polarity() {
        Polarity::Yang => "Nine",
        Polarity::Yin => "Six",
    };
    let place = match line.position {
        1 => "at the beginning".to_string(),
        6 => "at the top".to_string(),
        2 => "in the second place".to_string(),
        3 => "in the third place".to_string(),
        4 => "in the fourth place".to_string(),
        5 => "in the fifth place".to_string(),
        other => format!("in place {other}"),
    };
    format!("{polarity} {place}")
}

/// Print one hexagram with its catalog entry: header, glyph stack (top
/// line first), and judgment. Changing lines are marked with `○` when
/// `mark_changing` is set.
fn print_reading(reading: &HexagramReading, mark_changing: bool) {
    let entry = &reading.entry;
    println!(
        "  {} {}",
        entry.name.bold(),
        format!("(hexagram {})", entry.number).dimmed()
    );
    println!(
        "  above {}, below {}",
        entry.upper_trigram, entry.lower_trigram
    );
    println!();

    for position in (1..=6u8).rev() {
        if let Some(line) = reading.hexagram.line(position) {
            let bar = match line.polarity() {
                Polarity::Yang => "━━━━━━━",
                Polarity::Yin => "━━━ ━━━",
            };
            let mark = if mark_changing && line.is_changing() {
                " ○"
            } else {
                ""
            };
            println!("    {bar}{mark}");
        }
    }

    println!();
    println!("  {}", entry.description);
}

/// Render history entries as a table: id, time, question, hexagrams.
fn history_table(entries: &[HistoryEntry]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Time", "Question", "Hexagrams"]);

    for entry in entries {
        let question = if entry.question.is_empty() {
            "—".to_string()
        } else {
            entry.question.clone()
        };
        table.add_row(vec![
            entry.id.short(),
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            question,
            entry.summary(),
        ]);
    }

    table
}

//! CLI frontend for the Zhouyi three-coin casting engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

const DEFAULT_HISTORY_FILE: &str = "zhouyi_history.json";

#[derive(Parser)]
#[command(
    name = "zhouyi",
    about = "Zhouyi — three-coin hexagram casting",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram for a question
    Cast {
        /// The question put to the oracle (may be empty)
        question: String,

        /// RNG seed for a reproducible casting
        #[arg(short, long)]
        seed: Option<u64>,

        /// Save the casting to history and print its record id
        #[arg(long)]
        save: bool,

        /// History file path
        #[arg(short, long, default_value = DEFAULT_HISTORY_FILE)]
        file: PathBuf,

        /// Alternate catalog dataset (JSON with the bundled schema)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// List past castings, most recent first
    History {
        /// History file path
        #[arg(short, long, default_value = DEFAULT_HISTORY_FILE)]
        file: PathBuf,
    },

    /// Show one saved casting in detail
    Show {
        /// Record id as printed by `cast --save`
        id: String,

        /// History file path
        #[arg(short, long, default_value = DEFAULT_HISTORY_FILE)]
        file: PathBuf,
    },

    /// Search saved castings by keyword (question and hexagram names)
    Search {
        /// Case-insensitive keyword; empty matches nothing
        keyword: String,

        /// History file path
        #[arg(short, long, default_value = DEFAULT_HISTORY_FILE)]
        file: PathBuf,
    },

    /// Look up a catalog entry by number, name, or signature
    Lookup {
        /// A number (1-64), a name, or a six-character binary signature
        key: String,

        /// Alternate catalog dataset (JSON with the bundled schema)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            question,
            seed,
            save,
            file,
            data,
        } => commands::cast::run(&question, seed, save, &file, data.as_deref()),
        Commands::History { file } => commands::history::run(&file),
        Commands::Show { id, file } => commands::show::run(&id, &file),
        Commands::Search { keyword, file } => commands::search::run(&keyword, &file),
        Commands::Lookup { key, data } => commands::lookup::run(&key, data.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use lexset_core::{WordTable, BUCKET_COUNT};

#[derive(Parser)]
#[command(name = "lexset", about = "Lexset CLI — word lookup ops")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Membership check for one or more words
    Check {
        #[arg(long)]
        dict: PathBuf,
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Number of entries in the word list
    Size {
        #[arg(long)]
        dict: PathBuf,
    },

    /// Bucket occupancy of the loaded table
    Stats {
        #[arg(long)]
        dict: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Check { dict, words } => {
            let table = load_table(&dict)?;
            for word in &words {
                println!("{word}: {}", table.check(word));
            }
        }

        Cmd::Size { dict } => {
            let table = load_table(&dict)?;
            println!("{}", table.len());
        }

        Cmd::Stats { dict } => {
            let table = load_table(&dict)?;
            let stats = table.stats();
            println!("entries: {}", stats.entries);
            println!("used buckets: {}/{BUCKET_COUNT}", stats.used_buckets);
            println!("longest chain: {}", stats.longest_chain);
            println!("load factor: {:.4}", stats.load_factor);
        }
    }

    Ok(())
}

fn load_table(dict: &Path) -> Result<WordTable> {
    let started = Instant::now();
    let mut table = WordTable::new();
    let outcome = table
        .load_path(dict)
        .with_context(|| format!("loading word list {}", dict.display()))?;
    if outcome.skipped > 0 {
        warn!(skipped = outcome.skipped, "overlong tokens ignored");
    }
    info!(
        words = outcome.inserted,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "word list loaded"
    );
    Ok(table)
}

mod error;
mod index;
mod output;
mod query;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use index::types::Entry;
use index::{builder, loader, IndexBuilder};
use query::{SearchOptions, Searcher};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "doxi")]
#[command(about = "Search-index builder and lookup for static documentation sites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index blob from newline-delimited JSON entry records
    Build {
        /// Input file of entry records, one JSON object per line ("-" for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output path for the index blob
        #[arg(short, long, default_value = "search_index.json")]
        output: PathBuf,

        /// Emit the script-wrapped form (var documenterSearchIndex = ...)
        #[arg(long)]
        script: bool,
    },
    /// Search an index blob
    Search {
        /// Path to the index blob (.json or script-wrapped .js)
        index: PathBuf,

        /// Search query (empty returns every entry in index order)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,

        /// Maximum results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only match entries with this category tag
        #[arg(short, long)]
        category: Option<String>,

        /// Print only distinct locations
        #[arg(long)]
        locations: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show index statistics
    Stats {
        /// Path to the index blob
        index: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            script,
        } => {
            let index = build_from_records(&input)?;
            let count = index.len();

            if script {
                builder::write_script(&index, &output)?;
            } else {
                builder::write_json(&index, &output)?;
            }

            println!("Wrote {} entries to {}", count, output.display());
        }

        Commands::Search {
            index,
            query,
            limit,
            category,
            locations,
            no_color,
        } => {
            let loaded = loader::load_path(&index)
                .with_context(|| format!("failed to load index {}", index.display()))?;

            let query_str = query.join(" ");
            let options = SearchOptions { limit, category };

            let searcher = Searcher::new(&loaded);
            let hits = searcher.search(&query_str, &options);

            if locations {
                output::print_locations_only(&hits)?;
            } else {
                output::print_hits(&hits, &query_str, !no_color)?;
            }
        }

        Commands::Stats { index } => {
            index::stats::show_stats(&index)?;
        }
    }

    Ok(())
}

/// Read entry records from a JSONL file or stdin, in order
fn build_from_records(input: &Path) -> Result<index::SearchIndex> {
    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let file = std::fs::File::open(input)
            .with_context(|| format!("failed to open {}", input.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut builder = IndexBuilder::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: Entry = serde_json::from_str(&line)
            .with_context(|| format!("invalid entry record at line {}", line_no + 1))?;
        builder.push(entry);
    }

    Ok(builder.finish())
}

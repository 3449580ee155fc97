//! RamDB CLI
//!
//! Command-line tools for loading and querying RamDB data sets.
//!
//! # Commands
//!
//! - `demo` - Run the example queries over the built-in people set
//! - `get` - Look up the first record with a given field value
//! - `find` - Run a JSON query file against a seed file
//! - `stats` - Display collection sizes and operation counters

mod commands;
mod error;

use clap::{Parser, Subcommand};
use commands::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// RamDB command-line query tools.
#[derive(Parser)]
#[command(name = "ramdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Output format
    #[arg(global = true, short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the example queries over the built-in people set
    Demo,

    /// Look up the first record whose field equals a value
    Get {
        /// Seed file: a JSON object of collection name to record array
        #[arg(short, long)]
        data: PathBuf,

        /// Collection to search
        #[arg(short, long)]
        collection: String,

        /// Field to compare
        #[arg(short, long)]
        key: String,

        /// Value to match, as JSON (bare words are taken as text)
        #[arg(long)]
        value: String,
    },

    /// Run a query file against a seed file
    Find {
        /// Seed file: a JSON object of collection name to record array
        #[arg(short, long)]
        data: PathBuf,

        /// JSON query tree
        #[arg(short, long)]
        query: PathBuf,
    },

    /// Display collection sizes and operation counters
    Stats {
        /// Seed file: a JSON object of collection name to record array
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo => commands::demo::run(cli.format)?,
        Commands::Get {
            data,
            collection,
            key,
            value,
        } => commands::get::run(&data, &collection, &key, &value, cli.format)?,
        Commands::Find { data, query } => commands::find::run(&data, &query, cli.format)?,
        Commands::Stats { data } => commands::stats::run(&data, cli.format)?,
        Commands::Version => {
            println!("RamDB CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("RamDB Core v{}", ramdb_core::VERSION);
        }
    }

    Ok(())
}

//! CLI command definitions for the `starframe` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod collection;
pub mod dry_run;
pub mod health;
pub mod write;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Write tables of embeddings and metadata to a vector store.
#[derive(Parser)]
#[command(name = "starframe", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress logs and styled output; errors and --json output still print.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory containing config.toml.
    #[arg(long, global = true, env = "STARFRAME_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Writer host URL (overrides config.toml).
    #[arg(long, global = true, env = "STARFRAME_HOST")]
    pub host: Option<String>,

    /// API key (overrides config.toml).
    #[arg(long, global = true, env = "STARFRAME_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert a table's rows into a collection.
    Insert(WriteArgs),

    /// Update a table's rows in a collection.
    Update(WriteArgs),

    /// Delete a table's rows from a collection, by the `id` in each row's metadata.
    #[command(alias = "rm")]
    Delete(WriteArgs),

    /// Manage collections (create, delete).
    Collection {
        #[command(subcommand)]
        action: collection::CollectionCommand,
    },

    /// Check that the writer host is reachable.
    Health,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// How command results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    /// Whether styled (non-JSON) output should be printed.
    pub fn styled(self) -> bool {
        !self.json && !self.quiet
    }
}

/// Arguments shared by insert, update and delete.
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Table file: a JSON object of columns, a JSON array of rows, or JSON Lines (.jsonl).
    pub file: PathBuf,

    /// Target collection id.
    #[arg(long)]
    pub collection_id: Option<String>,

    /// Target collection name.
    #[arg(long)]
    pub collection_name: Option<String>,

    /// Validate and print the extracted columns without sending them.
    #[arg(long)]
    pub dry_run: bool,
}

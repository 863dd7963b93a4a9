//! CLI argument definitions for deplens.
//!
//! Uses `clap` derive macros to define the full command surface. Each
//! command corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "deplens",
    version,
    about = "Readable views over a build tool's resolved dependency graph",
    long_about = "deplens reads a resolved dependency report (Gradle `dependencies` output \
                  or its JSON form) and derives two views from it: the hierarchical graph \
                  exactly as resolved, and a deduplicated, alphabetically sorted view per \
                  configuration with conflict losers hidden."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the hierarchical view: the graph exactly as resolved
    Tree {
        /// Path to the dependency report file
        report: PathBuf,
        /// Maximum depth to display
        #[arg(long)]
        depth: Option<usize>,
        /// Output format: text, json
        #[arg(long, default_value = "text", env = "DEPLENS_FORMAT")]
        format: String,
    },

    /// Print the sorted view: deduplicated and alphabetical per configuration
    Sorted {
        /// Path to the dependency report file
        report: PathBuf,
        /// Output format: text, json
        #[arg(long, default_value = "text", env = "DEPLENS_FORMAT")]
        format: String,
    },

    /// Show per-configuration totals and version conflicts
    Summary {
        /// Path to the dependency report file
        report: PathBuf,
    },

    /// Validate a report without rendering it
    Check {
        /// Path to the dependency report file
        report: PathBuf,
    },

    /// Re-derive and print a view whenever the report file changes
    Watch {
        /// Path to the dependency report file
        report: PathBuf,
        /// View to print on each change: tree, sorted
        #[arg(long, default_value = "sorted")]
        view: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

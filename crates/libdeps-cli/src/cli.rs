//! CLI argument definitions for libdeps.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "libdeps",
    version,
    about = "Resolve exact-version library pins into a consistent configuration",
    long_about = "libdeps keeps a registry of library versions and the exact versions \
                  each one pins, and finds a single version of every library reachable \
                  from a root."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the index manifest
    #[arg(long, global = true, default_value = "libdeps.toml")]
    pub manifest: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a root library and print the chosen versions
    Resolve {
        /// Root library name
        root: String,
        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
        /// Try the newest root version first
        #[arg(long)]
        descending: bool,
    },

    /// Print the dependency tree of a resolved root
    Tree {
        /// Root library name
        root: String,
        /// Maximum depth
        #[arg(long)]
        depth: Option<usize>,
        /// Explain why a library is part of the configuration
        #[arg(long)]
        why: Option<String>,
        /// Show what depends on a library
        #[arg(long)]
        inverted: Option<String>,
        /// Try the newest root version first
        #[arg(long)]
        descending: bool,
    },

    /// List the registered versions of a library
    Versions {
        /// Library name
        name: String,
    },

    /// Resolve every library in the manifest
    Check {
        /// Try the newest root version first
        #[arg(long)]
        descending: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}

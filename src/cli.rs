//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for tillr using the `clap` crate.
//!
//! # Commands
//!
//! - **lookup**: Run a query and print its results
//! - **tags**: List the tags in the catalog
//! - **db**: Refresh, inspect or clear the remote item database
//! - **prefs**: Read and change preferences
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tillr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["tillr", "lookup", "banana;tag:produce", "--all"]);
//! assert!(matches!(cli.command, Commands::Lookup { all: true, .. }));
//! ```

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tillr")]
#[command(about = "Item lookup and code entry for the point of sale", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Look up items by name, keyword, tag or code
    #[command(visible_alias = "l")]
    Lookup {
        /// Query; separate several with the configured separator (default `;`)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Show every search result instead of the first page
        #[arg(short = 'a', long = "all")]
        all: bool,

        /// Use the cached item database without fetching
        #[arg(short = 'o', long = "offline")]
        offline: bool,
    },

    /// List tags in the catalog with item counts
    Tags {
        /// Use the cached item database without fetching
        #[arg(short = 'o', long = "offline")]
        offline: bool,
    },

    /// Manage the remote item database
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },

    /// Read and change preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DbCommands {
    /// Fetch the database now, bypassing the cache
    Refresh,
    /// Show the cached database's name, version and size
    Info,
    /// Remove the cached database
    #[command(name = "clear-cache")]
    ClearCache,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PrefsCommands {
    /// Show one preference, or all of them
    Get {
        /// Preference key (e.g., items_per_page)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },

    /// Set a preference
    Set {
        /// Preference key=value (e.g., items_per_page=6)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Restore every preference to its default
    Reset,
}

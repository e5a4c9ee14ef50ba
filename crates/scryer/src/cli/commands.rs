//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use scryer::{SortDirection, SortOrder, Unique};
use std::path::PathBuf;

/// Scryer - look up Magic: The Gathering cards on Scryfall
#[derive(Parser, Debug)]
#[command(name = "scryer")]
#[command(about = "Look up Magic: The Gathering cards on Scryfall", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a card by Scryfall id
    Card {
        /// Scryfall id of the card
        id: String,
    },

    /// Fetch a card by name
    Named {
        /// Card name
        name: String,

        /// Match the name fuzzily instead of exactly
        #[arg(long)]
        fuzzy: bool,

        /// Restrict the lookup to a set code
        #[arg(long)]
        set: Option<String>,
    },

    /// Search cards with Scryfall syntax
    Search {
        /// Search query
        q: String,

        /// Page number
        #[arg(long, default_value = "1")]
        page: u32,

        /// Sort field
        #[arg(long)]
        order: Option<SortOrder>,

        /// Sort direction
        #[arg(long)]
        dir: Option<SortDirection>,

        /// Duplicate handling
        #[arg(long)]
        unique: Option<Unique>,
    },

    /// List every set
    Sets,

    /// Fetch a set by code
    Set {
        /// Set code, such as m19
        code: String,
    },

    /// Fetch a random card
    Random {
        /// Restrict the pick to cards matching this query
        q: Option<String>,
    },

    /// Suggest card names completing a prefix
    Autocomplete {
        /// Name prefix
        q: String,

        /// Include extras such as tokens
        #[arg(long)]
        include_extras: bool,
    },

    /// List the rulings for a card
    Rulings {
        /// Scryfall id of the card
        id: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One line per record
    Human,
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vantage")]
#[command(about = "Resolve search result views from stored configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the settings file
    #[arg(long, global = true, default_value = "vantage.json")]
    pub store: PathBuf,

    /// Resolve as an authenticated (admin) caller
    #[arg(long, global = true)]
    pub authenticated: bool,

    /// Use the built-in shared-searching layouts
    #[arg(long, global = true)]
    pub shared: bool,

    /// Collapse detail rows into a single row
    #[arg(long, global = true)]
    pub merged_details: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a query string into a view model
    #[command(alias = "r")]
    Resolve {
        /// Raw query string, e.g. "sort=Date&order=d&limit=25"
        #[arg(default_value = "")]
        query: String,

        /// Emit the resolved view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the stored configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Build an index-entry cross-navigation URL
    Url {
        /// The index entry text the field must match
        #[arg(long)]
        entry: String,

        /// Element id of the index field
        #[arg(long)]
        field: u32,

        /// Match condition for the added clause
        #[arg(long, default_value = "is exactly")]
        condition: String,

        /// Query string of the current request
        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the stored option texts
    Show,
    /// Seed blank options with built-in defaults
    Init,
    /// Set one option's raw text
    Set { key: String, value: String },
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tf2cat", version, about = "Team Fortress 2 item name resolution")]
pub struct Cli {
    /// Path to a catalog snapshot JSON file
    #[arg(long, env = "TF2_CATALOG_SNAPSHOT", global = true, default_value = "schema.json")]
    pub snapshot: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a display name into an item record
    Parse {
        /// Display name, e.g. "Strange Australium Scattergun"
        name: String,

        /// Also check that the parsed record can exist
        #[arg(long)]
        check: bool,
    },

    /// Render the display name of an item record
    Name {
        /// Item record as JSON, e.g. '{"defindex":200,"quality":11}'
        record: String,

        /// Never prefix "The"
        #[arg(long)]
        no_proper: bool,

        /// Join paintkit and item name with " | "
        #[arg(long)]
        pipe: bool,

        /// Steam Community Market format
        #[arg(long)]
        market: bool,
    },

    /// Check whether an item record names an existing combination
    Exists {
        /// Item record as JSON
        record: String,
    },

    /// Print catalog and derived-map sizes
    Stats,

    /// List purchasable strange parts
    Parts,

    /// List craftable weapon defindexes for trading
    Weapons {
        /// Restrict to weapons usable by one class
        #[arg(long)]
        class: Option<String>,

        /// List the Non-Craftable trading set instead
        #[arg(long)]
        uncraftable: bool,
    },
}

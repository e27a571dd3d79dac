pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-prefs")]
#[command(about = "Browse the furniture catalog and manage local favorites and language")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "storefront.toml")]
    pub config: String,

    /// Override the storage directory from the config file
    #[arg(long)]
    pub storage_dir: Option<String>,

    /// Keep state in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage the favorites list
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Show or change the display language
    #[command(subcommand)]
    Language(LanguageCommand),

    /// Print the translation of a key in the active language
    Translate { key: String },

    /// List products, optionally restricted to one category
    Catalog { category: Option<String> },

    /// Show one product
    Product {
        id: String,
        #[arg(long)]
        category: Option<String>,
        /// Thumbnail to show, starting at 0
        #[arg(long, default_value = "0")]
        image: usize,
        /// Color swatch id, 1 to 7
        #[arg(long)]
        color: Option<String>,
    },

    /// List the color swatches
    Colors,

    /// Run the hero carousel for a number of ticks
    Carousel {
        #[arg(long, default_value = "6")]
        ticks: usize,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesCommand {
    List,
    Add { id: String },
    Remove { id: String },
    Toggle { id: String },
    Clear,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum LanguageCommand {
    Show,
    Set { tag: String },
    Toggle,
}

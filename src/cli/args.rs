use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::api::{VideoCategory, DEFAULT_SEARCH_LIMIT};

/// Browse the DR NU video catalog from the command line
#[derive(Parser)]
#[command(name = "drnu")]
#[command(version, propagate_version = true)]
#[command(about = "Browse the DR NU video catalog from the command line")]
pub struct Cli {
    /// Output format (defaults to output.format from the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Ignore cached responses and always query the API
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Write shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    /// Format named in the config file, falling back to pretty
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List program series
    #[command(alias = "s")]
    Series(SeriesArgs),

    /// Show a single program series
    SeriesInfo(SlugArgs),

    /// List all program series labels
    Labels,

    /// List videos in a category
    #[command(alias = "v")]
    Videos(VideosArgs),

    /// List videos of a program series
    SeriesVideos(SlugArgs),

    /// Show a single video
    Video(VideoArgs),

    /// Show the resource document of a video
    Resource(VideoArgs),

    /// Search the catalog
    Search(SearchArgs),

    /// Print a thumbnail image URL
    Image(ImageArgs),

    /// Manage local cache
    Cache(CacheArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the series command
#[derive(Args)]
pub struct SeriesArgs {
    /// Only show series with this slug (repeatable)
    #[arg(short, long = "slug")]
    pub slugs: Vec<String>,

    /// Only show series carrying this label
    #[arg(short, long)]
    pub label: Option<String>,
}

/// A program series slug
#[derive(Args)]
pub struct SlugArgs {
    /// Program series slug
    pub slug: String,
}

/// Arguments for the videos command
#[derive(Args)]
pub struct VideosArgs {
    /// Video category
    #[arg(value_enum, default_value = "newest")]
    pub category: CategoryArg,
}

/// Video category choices
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryArg {
    /// Every video
    All,
    /// Most recently published
    Newest,
    /// About to expire
    LastChance,
    /// Most viewed
    MostViewed,
    /// Editorial spotlight
    Spotlight,
    /// Highlights
    Highlight,
    /// Premieres
    Premiere,
}

impl CategoryArg {
    /// Convert to the catalog category
    pub fn to_category(self) -> VideoCategory {
        match self {
            Self::All => VideoCategory::All,
            Self::Newest => VideoCategory::Newest,
            Self::LastChance => VideoCategory::LastChance,
            Self::MostViewed => VideoCategory::MostViewed,
            Self::Spotlight => VideoCategory::Spotlight,
            Self::Highlight => VideoCategory::Highlight,
            Self::Premiere => VideoCategory::Premiere,
        }
    }
}

/// A video id
#[derive(Args)]
pub struct VideoArgs {
    /// Numeric video id
    pub id: u64,
}

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// Search term
    pub term: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: u32,
}

/// Arguments for the image command
#[derive(Args)]
pub struct ImageArgs {
    /// What the image belongs to
    #[arg(value_enum)]
    pub kind: ImageKind,

    /// Series slug, or numeric video/chapter id
    pub id: String,

    /// Image width in pixels
    #[arg(short = 'W', long)]
    pub width: u32,

    /// Image height in pixels (defaults to the width)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,
}

/// Image owners
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Series,
    Video,
    Chapter,
}

/// Arguments for the cache command
#[derive(Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Cache subcommands
#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show cached responses and their age
    Status,
    /// Delete all cached responses
    Clear,
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., cache.minutes)
        key: String,
        /// Value to set
        value: String,
    },
    /// Show configuration file path
    Path,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

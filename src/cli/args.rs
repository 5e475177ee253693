//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Costa Rica postal code site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Postal code dataset (JSON). Uses the embedded dataset if omitted
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Config file path (default: postal.toml)
    #[arg(short = 'C', long, global = true, default_value = "postal.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the static site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Query the dataset and print JSON
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// Check the dataset for malformed codes, duplicates and url collisions
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Minify the HTML content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    ///
    /// Example:
    ///   codigo-postal build --site-url "https://seo-postal-code.vercel.app"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub query: Query,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(long = "to", global = true, value_hint = clap::ValueHint::FilePath)]
    pub to: Option<PathBuf>,
}

/// Dataset queries.
#[derive(Subcommand, Debug, Clone)]
pub enum Query {
    /// List all provinces
    Provinces,

    /// List the cantons of a province
    Cantons { province: String },

    /// List districts of a province, or of one canton
    Districts {
        province: String,
        canton: Option<String>,
    },

    /// Find one district by exact names
    Find {
        province: String,
        canton: String,
        district: String,
    },

    /// Case-insensitive search across all fields
    Search { query: String },

    /// Page URL of a province, canton or district
    Url {
        province: String,
        canton: Option<String>,
        /// Requires a canton
        #[arg(requires = "canton")]
        district: Option<String>,
    },

    /// WhatsApp share link for a district
    Share {
        province: String,
        canton: String,
        district: String,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

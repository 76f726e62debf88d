//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG: &str = "folio.toml";

/// Folio static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the static site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print resolved content as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Load content and plan routes without writing anything
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Overrides for values that usually differ per deployment.
///
/// Each one can also come from the environment, so CI can set them without
/// touching `folio.toml`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    #[arg(short = 'U', long = "site-url", env = "FOLIO_SITE_URL", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Google Analytics 4 measurement ID ("" disables GA)
    #[arg(long = "ga-id", env = "FOLIO_GA_ID")]
    pub ga_id: Option<String>,

    /// Google Tag Manager container ID ("" disables GTM)
    #[arg(long = "gtm-id", env = "FOLIO_GTM_ID")]
    pub gtm_id: Option<String>,

    /// Scheduling link used by every "book a call" button
    #[arg(long = "scheduling-url", env = "FOLIO_SCHEDULING_URL", value_hint = clap::ValueHint::Url)]
    pub scheduling_url: Option<String>,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the HTML content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    #[command(flatten)]
    pub site: SiteArgs,
}

/// What `folio query` prints.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget {
    /// Case studies (list, or one record with its body when an ID is given)
    Work,
    /// The aggregated keyword list
    Keywords,
    /// JSON-LD for one route
    Schema,
    /// Every route with its output file
    Routes,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// What to print
    #[arg(value_enum)]
    pub target: QueryTarget,

    /// Case study ID for `work`, route path for `schema` (default: /)
    pub subject: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    #[command(flatten)]
    pub site: SiteArgs,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl Cli {
    /// Config file name, explicit or default.
    pub fn config_name(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
    }

    pub fn site_args(&self) -> &SiteArgs {
        match &self.command {
            Commands::Build { build_args } => &build_args.site,
            Commands::Query { args } => &args.site,
            Commands::Check { args } => &args.site,
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Build { build_args } => build_args.verbose,
            Commands::Check { args } => args.verbose,
            Commands::Query { .. } => false,
        }
    }
}

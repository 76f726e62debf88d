//! Folio - A static site generator for consultant portfolios.

mod cli;
mod config;
mod content;
mod embed;
mod generator;
mod logger;
mod page;
mod render;
mod seo;
mod utils;
mod work;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config, false),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Check { .. } => cli::check::check_site(&config),
    }
}

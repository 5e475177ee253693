//! codigo-postal - Costa Rica postal code lookup and static site generator.

#![allow(dead_code)]

mod cli;
mod config;
mod data;
mod generator;
mod logger;
mod route;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use data::PostalCodes;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    // Loaded once, shared read-only by every command
    let data = PostalCodes::load(config.build.data.as_deref())
        .context("Failed to load postal code dataset")?;
    debug!("data"; "{} records", data.len());

    match &cli.command {
        Commands::Build { .. } => cli::build::run_build(&config, &data),
        Commands::Query(args) => cli::query::run_query(args, &data),
        Commands::Validate { args } => cli::validate::validate_dataset(args, &data),
    }
}

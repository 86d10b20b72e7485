//! shiftplan library root.
//! Exposes the CLI parser, the high-level run() function and the editor
//! building blocks (codec, driver rule, session, sheet stores).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Backend, Config};
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Months => cli::commands::months::handle(),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load(cli.config.as_deref().map(Path::new))?;

    // --workbook switches to the local CSV workbook
    if let Some(dir) = &cli.workbook {
        cfg.backend = Backend::Csv;
        cfg.workbook_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}

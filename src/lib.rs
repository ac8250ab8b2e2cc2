//! SafeEntry library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Dashboard { .. } => commands::dashboard::handle(&cli.command, cfg),
        Commands::Watch { .. } => commands::watch::handle(&cli.command, cfg),
        Commands::Manhole { .. } => commands::manhole::handle(&cli.command, cfg),
        Commands::Heatmap { .. } => commands::heatmap::handle(&cli.command, cfg),
        Commands::Logs { .. } => commands::logs::handle(&cli.command, cfg),
        Commands::Alerts { .. } => commands::alerts::handle(&cli.command, cfg),
        Commands::Resolve { .. } => commands::alerts::handle_resolve(&cli.command, cfg),
        Commands::Qr { .. } => commands::qr::handle(&cli.command, cfg),
        Commands::Score { .. } => commands::score::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and shared by every handler
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}

//! gapcheck library root.
//! Exposes the CLI parser, the high-level run() function and the pure gap
//! detection core (`core::calculator`) for reuse.

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
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::date::resolve_clock;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // "today" is resolved once: every step of a command sees the same day
    let today = resolve_clock(&cli.today)?.today();

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, today),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, today),
        Commands::List => cli::commands::list::handle(&cli.command, cfg, today),
        Commands::Gaps { .. } => cli::commands::gaps::handle(&cli.command, cfg, today),
        Commands::Explain { .. } => cli::commands::explain::handle(&cli.command, cfg, today),
        Commands::References => cli::commands::references::handle(&cli.command, cfg, today),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, today),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once per command
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}

//! tip library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::{CommandFactory, Parser};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::On) => cli::commands::on::handle(cfg),
        Some(Commands::Off) => cli::commands::off::handle(cfg),
        Some(cmd @ Commands::Note { .. }) => cli::commands::note::handle(cmd, cfg),
        Some(Commands::Info) => cli::commands::info::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli, cfg),

        // No subcommand: print usage followed by the current report
        None => {
            Cli::command().print_help()?;
            println!();
            cli::commands::info::handle(cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // apply record file override from the command line
    if let Some(custom_file) = &cli.file {
        cfg.record_file = custom_file.clone();
    }

    dispatch(&cli, &cfg)
}

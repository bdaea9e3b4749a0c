mod cli;
mod commands;
mod config;
mod paths;
mod progress;
mod render;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use config::Config;
use std::io;
use std::path::PathBuf;

/// Global context for the application
pub struct Context {
    pub quiet: bool,
    pub config: Config,
    /// apt-get path from the command line, else from the config file
    pub apt_get: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let config = Config::load()?;
    let apt_get = cli.apt_get.clone().or_else(|| config.apt_get_path());

    let ctx = Context {
        quiet: cli.quiet,
        config,
        apt_get,
    };

    match cli.command {
        Command::Upgrades(args) => commands::upgrades::run(&ctx, args),
        Command::Install(args) => commands::install::run(&ctx, args),
        Command::Parse(args) => commands::parse::run(&ctx, args),
        Command::Check => commands::check::run(&ctx),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "aptsim", &mut io::stdout());
            Ok(())
        }
    }
}

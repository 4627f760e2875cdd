mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Context;
use crate::config::TongshuConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context {
        config: TongshuConfig::load(cli.config.as_deref())?,
        json: cli.json,
    };
    match cli.command {
        Command::Day(args) => commands::day(&ctx, args),
        Command::Month(args) => commands::month(&ctx, args),
        Command::Lunar(args) => commands::lunar(&ctx, args),
        Command::Table => commands::table(&ctx),
        Command::Deity(command) => commands::deity(&ctx, command),
        Command::Check => commands::check(&ctx),
    }
}

mod cli;
mod config;
mod dates_cmd;
mod logging;
mod show_cmd;
mod times_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Dates(args) => dates_cmd::run(args),
        Command::Times(args) => times_cmd::run(args),
        Command::Show(args) => show_cmd::run(args),
    }
}

mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod relate_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::TemporaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TemporaConfig::load(cli.config.as_deref())?;
    let chronology = convert::build_chronology(&config.chronology)?;
    match cli.command {
        Command::Fields(args) => calendar_cmd::fields(args, &chronology),
        Command::Add(args) => calendar_cmd::add(args, &chronology),
        Command::Between(args) => calendar_cmd::between(args, &chronology),
        Command::Truncate(args) => calendar_cmd::truncate(args, &chronology),
        Command::Round(args) => {
            let mode = convert::parse_rounding_mode(&config.rounding.mode)?;
            calendar_cmd::round(args, &chronology, mode)
        }
        Command::Relate(args) => relate_cmd::run(args, &chronology),
    }
}

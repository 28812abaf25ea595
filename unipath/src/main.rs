// unipath/src/main.rs
//! unipath entry point.
//!
//! Parses the command line, sets up logging and dispatches to the selected command.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use unipath::cli::{Cli, Commands};
use unipath::commands;
use unipath::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Unify(cmd) => commands::unify::run_unify_command(&cmd, args.quiet),
        Commands::Demo(cmd) => commands::demo::run_demo_command(&cmd),
    }
}

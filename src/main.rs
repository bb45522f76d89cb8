//! Command-line entry point for `topgen`.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod splice;

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    match args.command {
        cli::Command::Check => commands::check::run(&args.global, &log),
        cli::Command::Gen(opts) => commands::generate::run(&args.global, &opts, &log),
        cli::Command::Splice(opts) => commands::splice::run(&args.global, &opts, &log),
        cli::Command::Version => {
            let version = option_env!("TOPGEN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            #[allow(clippy::print_stdout)]
            {
                println!("topgen {version}");
            }
            Ok(())
        }
    }
}

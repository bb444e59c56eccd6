//! Composition CLI: the `composition` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            a,
            b,
            strategy,
            json,
        } => commands::run::run(a, b, strategy, json),

        Commands::Laziness {
            a,
            b,
            strategy,
            json,
        } => commands::laziness::run(a, b, strategy, json),
    }
}

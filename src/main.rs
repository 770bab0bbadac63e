// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

mod cli;
use cli::{display, logger, read_input, Cli, CliError, Commands};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{} {}", display::error_mark(), e);
            std::process::exit(1);
        }
    }
}

fn run(command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Search {
            key,
            file,
            sort,
            json,
        } => cli::search_command(&read_input(file.as_deref())?, key, sort, json),
        Commands::Sort { file } => cli::sort_command(&read_input(file.as_deref())?),
        Commands::Split { file } => cli::split_command(&read_input(file.as_deref())?),
        Commands::Report { json } => cli::report_command(json),
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lightcap command-line interface.
//!
//! Every data command reads a JSON array of integers from a file, or from
//! stdin when no file is given, and runs it through one capability.

pub mod display;
pub mod logger;

use clap::{ArgAction, Parser, Subcommand};
use lightcap::{CapabilityError, CapabilityReport, NonEmpty, SortedSlice, SortedVec};
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "lightcap",
    about = "Non-empty, sorted and bounds-branded views behind a tiny trust kernel",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Binary search a sorted JSON array of integers
    Search {
        /// Key to look for
        #[arg(allow_negative_numbers = true)]
        key: i64,

        /// JSON file containing the array (stdin if omitted)
        file: Option<PathBuf>,

        /// Sort the input first instead of rejecting unsorted input
        #[arg(long)]
        sort: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sort a JSON array of integers
    Sort {
        /// JSON file containing the array (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Split a non-empty JSON array into head and tail
    Split {
        /// JSON file containing the array (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Print the capability report
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Errors surfaced to the user by the CLI.
#[derive(Debug)]
pub enum CliError {
    Io { path: Option<PathBuf>, source: std::io::Error },
    Json(serde_json::Error),
    Capability(CapabilityError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io {
                path: Some(path),
                source,
            } => write!(f, "failed to read {}: {}", path.display(), source),
            CliError::Io { path: None, source } => write!(f, "failed to read stdin: {}", source),
            CliError::Json(e) => write!(f, "invalid JSON input: {}", e),
            CliError::Capability(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<CapabilityError> for CliError {
    fn from(e: CapabilityError) -> Self {
        CliError::Capability(e)
    }
}

/// Read the raw input text from `file`, or stdin.
pub fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: Some(path.to_path_buf()),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Io { path: None, source })?;
            Ok(text)
        }
    }
}

/// Parse a JSON array of integers.
pub fn parse_values(text: &str) -> Result<Vec<i64>, CliError> {
    Ok(serde_json::from_str(text)?)
}

/// JSON shape of a `search` result.
#[derive(Serialize)]
struct SearchOutput {
    key: i64,
    index: Option<usize>,
}

/// `search`: validate (or sort) the input, then look for `key`.
pub fn search_command(text: &str, key: i64, sort: bool, json: bool) -> Result<String, CliError> {
    let values = parse_values(text)?;
    let len = values.len();
    let index = if sort {
        SortedVec::new(values).search(&key).map(|(i, _)| i)
    } else {
        SortedSlice::validate(values.as_slice())?
            .search(&key)
            .map(|(i, _)| i)
    };
    tracing::info!("searched {} elements for {}", len, key);

    if json {
        return Ok(serde_json::to_string(&SearchOutput { key, index })?);
    }
    Ok(match index {
        Some(i) => display::found_line(key, i),
        None => display::missing_line(key),
    })
}

/// `sort`: the input in ascending order, as JSON.
pub fn sort_command(text: &str) -> Result<String, CliError> {
    let sorted = SortedVec::new(parse_values(text)?);
    Ok(serde_json::to_string(&sorted)?)
}

/// `split`: head and tail of a non-empty input.
pub fn split_command(text: &str) -> Result<String, CliError> {
    let values = parse_values(text)?;
    let (head, tail) = NonEmpty::try_from(values.as_slice())?.split_first();
    Ok(format!("head: {}\ntail: {}", head, serde_json::to_string(tail)?))
}

/// `report`: the capability report, boxed or as pretty JSON.
pub fn report_command(json: bool) -> Result<String, CliError> {
    let report = CapabilityReport::generate();
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(display::render_report(&report))
    }
}

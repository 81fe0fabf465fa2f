//! # projsize
//!
//! A CLI tool for measuring the size of a project in lines.
//!
//! ## Overview
//!
//! projsize is built on top of projsizelib and provides a command-line
//! interface for counting lines across a directory tree. Files are picked
//! by a file-name glob, whole directories can be excluded by name, and the
//! result is a per-file breakdown plus a total.
//!
//! ## Usage
//!
//! ```bash
//! # Count *.py lines under the current directory, skipping venv/
//! projsize
//!
//! # Count a specific project
//! projsize --path ~/projects/tracker
//!
//! # Skip several directories
//! projsize --skip venv --skip .git --skip build
//!
//! # Count a different file type
//! projsize -e "*.rs"
//!
//! # Output as JSON
//! projsize --output json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use projsizelib::{scan, ScanOptions};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("projsize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines across a project tree, with a per-file breakdown")
        .arg(
            Arg::new("path")
                .long("path")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(".")
                .help("Root directory to scan (defaults to current directory)"),
        )
        .arg(
            Arg::new("skip")
                .long("skip")
                .action(ArgAction::Append)
                .default_value("venv")
                .help("Directory name to exclude (can be specified multiple times)"),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .default_value("*.py")
                .help("Glob pattern selecting files to count"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Extract the skip list from matches
fn extract_skip(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("skip")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Run the scan and render the result
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let root = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let extension = matches
        .get_one::<String>("extension")
        .map(|s| s.as_str())
        .unwrap_or("*.py");

    let options = ScanOptions::new()
        .extension(extension)
        .skip(extract_skip(matches));

    let report = scan(&root, options)
        .with_context(|| format!("failed to scan '{}'", root.display()))?;

    let output = match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => serde_json::to_string_pretty(&report)?,
        _ => render::render_report(&report),
    };

    Ok(output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#![warn(clippy::pedantic)]
//! Command-line driver for the Solidity errors collector.
//!
//! Validates the arguments, runs the collection pipeline over a source
//! directory and reports the outcome, either as a plain message or as JSON.
use clap::{error::ErrorKind, Parser};
use parser::Cli;
use serde_json::json;
use solidity_errors_sdk::{collect, utils::project::relative_file_path, CollectorConfig, Outcome};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod parser;

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let config = CollectorConfig::new(&args.source_dir, &args.output);
    let outcome = collect(&config)?;

    if args.report {
        let report = outcome_to_json(&outcome, &config.source_dir);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &outcome {
        Outcome::NoFilesFound => {
            println!(
                "No Solidity files found in {}",
                config.source_dir.display()
            );
        }
        Outcome::NoErrorsFound { scanned } => {
            println!(
                "No custom errors found in {} Solidity file(s)",
                scanned.len()
            );
        }
        Outcome::Generated {
            output,
            scanned,
            errors,
        } => {
            println!(
                "Collected {} custom error(s) from {} file(s) into {}",
                errors.len(),
                scanned.len(),
                output.display()
            );
        }
    }
    Ok(())
}

fn outcome_to_json(outcome: &Outcome, source_dir: &Path) -> serde_json::Value {
    match outcome {
        Outcome::NoFilesFound => json!({
            "status": "no_files_found",
            "scanned": [],
            "errors": [],
            "output": null,
        }),
        Outcome::NoErrorsFound { scanned } => json!({
            "status": "no_errors_found",
            "scanned": relative_paths(scanned, source_dir),
            "errors": [],
            "output": null,
        }),
        Outcome::Generated {
            output,
            scanned,
            errors,
        } => json!({
            "status": "generated",
            "scanned": relative_paths(scanned, source_dir),
            "errors": errors,
            "output": output.to_string_lossy(),
        }),
    }
}

fn relative_paths(paths: &[PathBuf], root: &Path) -> Vec<String> {
    paths.iter().map(|p| relative_file_path(p, root)).collect()
}

//! The collection pipeline: discover sources, extract and aggregate their
//! custom errors, and generate the output contract when there is something to write.
use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    contract::generate_contract,
    custom_error::extract_errors,
    error_set::{aggregate, ErrorSet},
    errors::CollectorErr,
    source_file::{discover_source_files, SourceFile},
};

/// Inputs of a collection run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Directory scanned recursively for `.sol` files.
    pub source_dir: PathBuf,
    /// Path of the generated contract.
    pub output: PathBuf,
}

impl CollectorConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        CollectorConfig {
            source_dir: source_dir.into(),
            output: output.into(),
        }
    }
}

/// Terminal state of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No source files under the directory. Nothing was written.
    NoFilesFound,
    /// Source files exist but declare no custom errors. Nothing was written.
    NoErrorsFound { scanned: Vec<PathBuf> },
    /// The contract was written to `output`.
    Generated {
        output: PathBuf,
        scanned: Vec<PathBuf>,
        errors: ErrorSet,
    },
}

/// Runs the whole pipeline for `config`.
///
/// The output file is only touched in the `Outcome::Generated` case.
///
/// # Errors
/// - `CollectorErr::InvalidDirectory` if the source directory does not exist or is not a directory.
/// - `CollectorErr::InvalidOutputPath` if the output path has no file name.
/// - `CollectorErr::Walk` / `CollectorErr::Read` on the first unreadable entry or file.
/// - `CollectorErr::Write` if the output cannot be written.
pub fn collect(config: &CollectorConfig) -> Result<Outcome, CollectorErr> {
    if !config.source_dir.is_dir() {
        return Err(CollectorErr::InvalidDirectory(config.source_dir.clone()));
    }

    let files = discover_source_files(&config.source_dir)?;
    if files.is_empty() {
        info!(dir = %config.source_dir.display(), "no source files found");
        return Ok(Outcome::NoFilesFound);
    }

    let errors = collect_errors(&files)?;
    let scanned: Vec<PathBuf> = files.into_iter().map(|f| f.path).collect();
    if errors.is_empty() {
        info!("no custom errors found");
        return Ok(Outcome::NoErrorsFound { scanned });
    }

    let output = generate_contract(&errors, &config.output)?;
    Ok(Outcome::Generated {
        output,
        scanned,
        errors,
    })
}

/// Extracts errors from every file in turn and merges them.
///
/// # Errors
/// - `CollectorErr::Read` for the first file that cannot be read; later files are not opened.
pub fn collect_errors(files: &[SourceFile]) -> Result<ErrorSet, CollectorErr> {
    let mut per_file = Vec::with_capacity(files.len());
    for file in files {
        let content = file.read()?;
        let errors = extract_errors(&content);
        debug!(path = %file.path.display(), errors = errors.len(), "extracted custom errors");
        per_file.push(errors);
    }
    let set = aggregate(per_file);
    info!(files = files.len(), unique_errors = set.len(), "aggregated custom errors");
    Ok(set)
}

//! Error types for the Solidity errors SDK.
//!
//! Defines the `CollectorErr` enum representing the failures encountered while
//! discovering sources, extracting declarations or writing the generated contract.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CollectorErr {
    #[error("directory does not exist or is not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),
    #[error("output path has no file name to derive the contract name from: {}", .0.display())]
    InvalidOutputPath(PathBuf),
    #[error("failed to read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to walk source directory")]
    Walk(#[from] walkdir::Error),
}

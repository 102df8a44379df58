use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::errors::CollectorErr;

/// Extension (without the dot) of the files the collector scans.
pub const SOURCE_EXTENSION: &str = "sol";

/// A Solidity source file found under the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    /// Reads the whole file into memory. The handle is closed before returning.
    ///
    /// # Errors
    /// - `CollectorErr::Read` if the file cannot be opened or is not valid UTF-8.
    pub fn read(&self) -> Result<String, CollectorErr> {
        fs::read_to_string(&self.path).map_err(|source| CollectorErr::Read {
            path: self.path.clone(),
            source,
        })
    }
}

fn has_source_extension(file_name: &str) -> bool {
    file_name
        .strip_suffix(SOURCE_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Regular files and symlinks that do not resolve to a directory. A dangling
/// link counts, so reading it later fails the run instead of hiding the file.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Recursively collects every `.sol` file under `root`, sorted by path.
///
/// The caller is expected to have checked that `root` is a directory.
///
/// # Errors
/// - `CollectorErr::Walk` if a directory entry cannot be read. The walk is aborted
///   rather than skipping the unreadable subtree.
pub fn discover_source_files(root: &Path) -> Result<Vec<SourceFile>, CollectorErr> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if is_file_like(&entry) && has_source_extension(&entry.file_name().to_string_lossy()) {
            debug!(path = %entry.path().display(), "discovered source file");
            files.push(SourceFile {
                path: entry.into_path(),
            });
        }
    }
    files.sort();
    Ok(files)
}

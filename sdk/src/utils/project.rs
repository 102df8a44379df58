use std::path::Path;

/// Name of the generated contract: the output file name without its extension.
///
/// Returns `None` when the path has no file name (e.g. `/` or `..`).
#[must_use]
pub fn contract_name(output: &Path) -> Option<String> {
    output
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
}

/// Strips `root` from `file_path` for display, falling back to the full path.
#[must_use]
pub fn relative_file_path(file_path: &Path, root: &Path) -> String {
    if let Ok(relative_path) = file_path.strip_prefix(root) {
        relative_path.to_string_lossy().to_string()
    } else {
        file_path.to_string_lossy().to_string()
    }
}

//! Candidate file discovery
//!
//! Walks a directory tree for `.json` files, pruning directories by name.
//! The exclusion list is an injectable parameter so tests never need a
//! real version-control layout on disk.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into by default: version-control metadata
/// plus the pipeline output directory the files under rewrite live next to.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", ".svn", ".hg", "LocalRunOutputs"];

/// Check whether a path names a JSON file
pub fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().map_or(false, |ext| ext == "json")
}

fn is_excluded_dir(entry: &DirEntry, excluded: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| excluded.iter().any(|e| e == name))
}

/// Recursively collect all JSON files under `root`, skipping any directory
/// whose name appears in `excluded`. Paths come back in walk order
/// (depth-first, sorted per directory) so runs are deterministic.
pub fn find_json_files(root: &Path, excluded: &[String]) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut json_files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, excluded));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if is_json_file(path) {
            json_files.push(path.to_path_buf());
        }
    }

    Ok(json_files)
}

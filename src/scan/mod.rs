//! Candidate module discovery.
//!
//! Recursive enumeration of module files under a root, used by the CLI
//! coverage report. The graph walk itself never needs discovery; it only
//! follows imports.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively list files under `root` with the given extension,
/// skipping hidden directories. Results are sorted for determinism.
pub fn scan_directory(root: &Path, ext: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some(ext))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

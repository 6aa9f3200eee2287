//! File system scanner for locating category documents.
//!
//! Entry directories are found by walking a category directory; the document
//! path is synthesized from the directory, not taken from its listing.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File name marking sort-order directories, which hold no entries.
/// Matched as a substring, so `MusicSort.xml` also counts.
pub const SORT_SENTINEL: &str = "Sort.xml";

/// Find every directory under `root` that looks like an entry and return
/// `dir/file_name` for each, in walk order.
///
/// A directory is an entry when it directly contains at least one file and
/// none of its file names contain [`SORT_SENTINEL`]. Whether `file_name`
/// actually exists is not checked here.
pub fn scan_directory(root: &Path, file_name: &str) -> Vec<PathBuf> {
    scan_directory_excluding(root, file_name, &[])
}

/// Like [`scan_directory`], skipping directories whose own name is listed in
/// `excluded_dirs`. Their subdirectories are still walked.
pub fn scan_directory_excluding(
    root: &Path,
    file_name: &str,
    excluded_dirs: &[&str],
) -> Vec<PathBuf> {
    let mut result = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
    {
        let dir = entry.path();

        let excluded = dir
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| excluded_dirs.contains(&n));
        if excluded {
            continue;
        }

        if is_entry_dir(dir) {
            result.push(dir.join(file_name));
        }
    }

    result
}

fn is_entry_dir(dir: &Path) -> bool {
    let Ok(read_dir) = fs::read_dir(dir) else {
        return false;
    };

    let mut has_files = false;
    for entry in read_dir.filter_map(|e| e.ok()) {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(SORT_SENTINEL) {
            return false;
        }
        has_files = true;
    }

    has_files
}

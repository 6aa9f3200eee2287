//! Category and document discovery for opt packages.
//!
//! A package root holds one subdirectory per category. Only categories whose
//! directory exists are extracted; within each, [`scan_directory`] finds the
//! entry documents.
//!
//! # Example
//!
//! ```ignore
//! use optx::discovery::{discover_categories, scan_category};
//!
//! for category in discover_categories("./A000/opt") {
//!     let paths = scan_category("./A000/opt", category);
//!     println!("{}: {} documents", category, paths.len());
//! }
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::category::Category;

pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use scanner::{scan_directory, scan_directory_excluding, SORT_SENTINEL};

/// Categories whose directory exists under `root`, in [`Category::ALL`] order.
pub fn discover_categories(root: impl AsRef<Path>) -> Vec<Category> {
    let root = root.as_ref();
    Category::ALL
        .into_iter()
        .filter(|c| root.join(c.dir_name()).is_dir())
        .collect()
}

/// Document paths for one category of the package at `root`.
pub fn scan_category(root: impl AsRef<Path>, category: Category) -> Vec<PathBuf> {
    scan_directory_excluding(
        &root.as_ref().join(category.dir_name()),
        category.file_name(),
        category.excluded_dirs(),
    )
}

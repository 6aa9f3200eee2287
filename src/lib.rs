//! optx - maimai opt package extractor
//!
//! A library for turning the per-entry XML documents and chart files of an
//! opt package into one JSON file per data category.

pub mod category;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod export;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod types;

pub use category::Category;
pub use discovery::{discover_categories, scan_category, scan_directory, Manifest};
pub use error::{DocumentError, OptxError, Result};
pub use export::write_records;
pub use pipeline::{
    extract_records, run_batch, run_category, BatchConfig, BatchReport, CategoryReport,
    ExtractConfig, Extracted,
};
pub use types::{rgb_to_hex, Colour, LocalizedId, NoteCounts};

//! Extraction pipeline.
//!
//! One job per category: scan the category directory, parse each document
//! and write the records to a JSON file. [`run_batch`] runs the jobs of a
//! package in parallel on a dedicated rayon pool.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use tracing::{debug, warn};

use crate::category::Category;
use crate::discovery::{discover_categories, scan_category};
use crate::error::{OptxError, Result};
use crate::export::write_records;
use crate::parser::{self, parse_xml, DocumentParser};

/// Settings shared by every category job of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Label prefixed to every output file name.
    pub package: String,
    pub output_dir: PathBuf,
    /// Log and skip documents that fail instead of aborting the job.
    pub skip_invalid: bool,
}

impl ExtractConfig {
    pub fn new(package: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            output_dir: output_dir.into(),
            skip_invalid: false,
        }
    }
}

/// Settings for a whole package run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub extract: ExtractConfig,
    /// Categories to extract. Empty means every category present.
    pub categories: Vec<Category>,
    /// Worker threads. `None` runs one thread per job.
    pub jobs: Option<usize>,
}

impl BatchConfig {
    pub fn new(extract: ExtractConfig) -> Self {
        Self {
            extract,
            categories: vec![],
            jobs: None,
        }
    }
}

/// Records parsed from a category, with the number of documents skipped.
#[derive(Debug)]
pub struct Extracted<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Outcome of one category job.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub category: Category,
    pub records: usize,
    pub skipped: usize,
    pub output: PathBuf,
}

/// Outcome of a package run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub reports: Vec<CategoryReport>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn total_records(&self) -> usize {
        self.reports.iter().map(|r| r.records).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.reports.iter().map(|r| r.skipped).sum()
    }
}

/// Parse every document in `paths`, in order.
pub fn extract_records<T>(
    paths: &[PathBuf],
    parse: DocumentParser<T>,
    config: &ExtractConfig,
) -> Result<Extracted<T>> {
    let mut records = Vec::with_capacity(paths.len());
    let mut skipped = 0;

    for path in paths {
        match read_document(path, parse) {
            Ok(record) => records.push(record),
            Err(e) if config.skip_invalid => {
                warn!("skipping {}: {}", path.display(), e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Extracted { records, skipped })
}

/// Read and parse a single document. Relative references inside it resolve
/// against its own directory.
pub fn read_document<T>(path: &Path, parse: DocumentParser<T>) -> Result<T> {
    debug!("reading {}", path.display());

    let source = fs::read_to_string(path).map_err(|e| OptxError::io(path, e))?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    parse_xml(&source)
        .and_then(|root| parse(&root, dir))
        .map_err(|source| OptxError::Document {
            path: path.to_path_buf(),
            source,
        })
}

/// Extract one category of the package at `root` and write its output file.
pub fn run_category(
    root: &Path,
    category: Category,
    config: &ExtractConfig,
) -> Result<CategoryReport> {
    match category {
        Category::Challenge => extract_category(root, category, parser::parse_challenge, config),
        Category::Chara => extract_category(root, category, parser::parse_chara, config),
        Category::CharaGenre => extract_category(root, category, parser::parse_chara_genre, config),
        Category::CollectionGenre => {
            extract_category(root, category, parser::parse_collection_genre, config)
        }
        Category::Course => extract_category(root, category, parser::parse_course, config),
        Category::Event => extract_category(root, category, parser::parse_event, config),
        Category::Frame => extract_category(root, category, parser::parse_frame, config),
        Category::Icon => extract_category(root, category, parser::parse_icon, config),
        Category::LoginBonus => extract_category(root, category, parser::parse_login_bonus, config),
        Category::Map => extract_category(root, category, parser::parse_map, config),
        Category::MapBonusMusic => {
            extract_category(root, category, parser::parse_map_bonus_music, config)
        }
        Category::MapColor => extract_category(root, category, parser::parse_map_color, config),
        Category::MapTreasure => {
            extract_category(root, category, parser::parse_map_treasure, config)
        }
        Category::Music => extract_category(root, category, parser::parse_music, config),
    }
}

fn extract_category<T: Serialize>(
    root: &Path,
    category: Category,
    parse: DocumentParser<T>,
    config: &ExtractConfig,
) -> Result<CategoryReport> {
    let paths = scan_category(root, category);
    debug!("{}: {} documents", category, paths.len());

    let extracted = extract_records(&paths, parse, config)?;
    let output = write_records(
        &config.output_dir,
        &config.package,
        category,
        &extracted.records,
    )?;

    Ok(CategoryReport {
        category,
        records: extracted.records.len(),
        skipped: extracted.skipped,
        output,
    })
}

/// The categories a batch will extract: those present under `root`,
/// narrowed to `filter` when it is not empty.
pub fn select_categories(root: &Path, filter: &[Category]) -> Vec<Category> {
    discover_categories(root)
        .into_iter()
        .filter(|c| filter.is_empty() || filter.contains(c))
        .collect()
}

/// Extract every selected category of the package at `root` in parallel.
///
/// The first failing job aborts the batch; files written by jobs that
/// already finished are left in place.
pub fn run_batch(root: &Path, config: &BatchConfig) -> Result<BatchReport> {
    let start = Instant::now();
    let categories = select_categories(root, &config.categories);

    let threads = config.jobs.unwrap_or(categories.len()).max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| OptxError::Batch {
            message: format!("Failed to start worker pool: {}", e),
            help: Some("Try a smaller --jobs value".to_string()),
        })?;
    debug!("running {} jobs on {} threads", categories.len(), threads);

    let reports = pool.install(|| {
        categories
            .par_iter()
            .map(|&category| run_category(root, category, &config.extract))
            .collect::<Result<Vec<_>>>()
    })?;

    Ok(BatchReport {
        reports,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventRecord;
    use tempfile::{tempdir, TempDir};

    fn write_doc(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn event_xml(id: u32, always_open: &str) -> String {
        format!(
            "<EventData><name><id>{id}</id><str>event {id}</str></name>\
             <infoType>0</infoType><alwaysOpen>{always_open}</alwaysOpen></EventData>"
        )
    }

    fn package() -> TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write_doc(root, "event/event00000001/Event.xml", &event_xml(1, "true"));
        write_doc(root, "event/event00000002/Event.xml", &event_xml(2, "maybe"));
        write_doc(
            root,
            "mapColor/mapColor000001/MapColor.xml",
            "<MapColorData><name><id>1</id><str>red</str></name>\
             <ColorGroupId><id>1</id><str>warm</str></ColorGroupId>\
             <Color><R>255</R><G>0</G><B>0</B></Color>\
             <ColorDark><R>128</R><G>0</G><B>0</B></ColorDark></MapColorData>",
        );
        dir
    }

    #[test]
    fn test_extract_records_stops_on_error() {
        let dir = package();
        let paths = scan_category(dir.path(), Category::Event);
        let config = ExtractConfig::new("A000", dir.path());

        let err = extract_records::<EventRecord>(&paths, parser::parse_event, &config).unwrap_err();

        assert!(matches!(err, OptxError::Document { .. }));
        assert!(err.to_string().contains("Event.xml"));
    }

    #[test]
    fn test_extract_records_skip_invalid() {
        let dir = package();
        let paths = scan_category(dir.path(), Category::Event);
        let config = ExtractConfig {
            skip_invalid: true,
            ..ExtractConfig::new("A000", dir.path())
        };

        let extracted = extract_records(&paths, parser::parse_event, &config).unwrap();

        assert_eq!(extracted.records.len(), 1);
        assert_eq!(extracted.skipped, 1);
        assert_eq!(extracted.records[0].event.id, 1);
    }

    #[test]
    fn test_missing_document_is_io_error() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "event/event00000001/Other.xml", "<x/>");
        let paths = scan_category(dir.path(), Category::Event);

        let result = extract_records(
            &paths,
            parser::parse_event,
            &ExtractConfig::new("A000", dir.path()),
        );

        assert!(matches!(result, Err(OptxError::Io { .. })));
    }

    #[test]
    fn test_run_category_writes_empty_output() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pkg/icon")).unwrap();
        let out = dir.path().join("out");

        let report = run_category(
            &dir.path().join("pkg"),
            Category::Icon,
            &ExtractConfig::new("A000", &out),
        )
        .unwrap();

        assert_eq!(report.records, 0);
        assert_eq!(report.output, out.join("A000-icon.json"));
        assert_eq!(fs::read_to_string(&report.output).unwrap(), "[]");
    }

    #[test]
    fn test_select_categories_filter() {
        let dir = package();

        assert_eq!(
            select_categories(dir.path(), &[]),
            vec![Category::Event, Category::MapColor]
        );
        assert_eq!(
            select_categories(dir.path(), &[Category::MapColor, Category::Music]),
            vec![Category::MapColor]
        );
    }

    #[test]
    fn test_run_batch() {
        let dir = package();
        let out = tempdir().unwrap();
        let config = BatchConfig {
            extract: ExtractConfig {
                skip_invalid: true,
                ..ExtractConfig::new("A000", out.path())
            },
            categories: vec![],
            jobs: Some(2),
        };

        let report = run_batch(dir.path(), &config).unwrap();

        let categories: Vec<Category> = report.reports.iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![Category::Event, Category::MapColor]);
        assert_eq!(report.total_records(), 2);
        assert_eq!(report.total_skipped(), 1);
        assert!(out.path().join("A000-event.json").is_file());
        assert!(out.path().join("A000-mapColor.json").is_file());
    }

    #[test]
    fn test_run_batch_aborts_on_error() {
        let dir = package();
        let out = tempdir().unwrap();
        let config = BatchConfig::new(ExtractConfig::new("A000", out.path()));

        assert!(matches!(
            run_batch(dir.path(), &config),
            Err(OptxError::Document { .. })
        ));
    }
}

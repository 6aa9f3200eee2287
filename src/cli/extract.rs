//! Extract command implementation.
//!
//! Resolves the run configuration from defaults, the manifest and the
//! command line, runs the batch and reports what was written.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::category::Category;
use crate::discovery::Manifest;
use crate::error::{OptxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{run_batch, select_categories, BatchConfig, BatchReport, ExtractConfig};

use super::Cli;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub batch: BatchConfig,
}

impl RunConfig {
    /// Layer the command line over a manifest (or defaults when `None`).
    pub fn resolve(cli: &Cli, manifest: Option<Manifest>) -> Result<Self> {
        let manifest = manifest.unwrap_or_default();

        let package = match cli.package.clone().or_else(|| manifest.package.clone()) {
            Some(label) => label,
            None => package_label(&cli.path).ok_or_else(|| OptxError::Usage {
                message: format!(
                    "Cannot derive a package label from {}",
                    cli.path.display()
                ),
                help: Some("Pass --package or set `package` in optx.yaml".to_string()),
            })?,
        };

        let jobs = cli.jobs.or(manifest.jobs);
        if jobs == Some(0) {
            return Err(OptxError::Usage {
                message: "--jobs must be at least 1".to_string(),
                help: None,
            });
        }

        let categories: Vec<Category> = if cli.only.is_empty() {
            manifest.category_filter()?
        } else {
            cli.only.clone()
        };

        Ok(Self {
            root: cli.path.clone(),
            batch: BatchConfig {
                extract: ExtractConfig {
                    package,
                    output_dir: cli.output.clone().unwrap_or(manifest.output),
                    skip_invalid: cli.skip_invalid || manifest.skip_invalid,
                },
                categories,
                jobs,
            },
        })
    }
}

/// Derive a package label from the package path.
///
/// Takes the text before the last path separator and returns its final
/// component, so both `A000/opt` and `A000/` give `A000`.
pub fn package_label(path: &Path) -> Option<String> {
    let text = path.to_string_lossy();
    let cut = text.rfind(|c: char| c == '/' || c == MAIN_SEPARATOR)?;
    Path::new(&text[..cut])
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn load_manifest(cli: &Cli) -> Result<Option<Manifest>> {
    match &cli.manifest {
        Some(path) => Manifest::load(path).map(Some),
        None => Manifest::find(Path::new(".")),
    }
}

pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let config = RunConfig::resolve(&cli, load_manifest(&cli)?)?;

    if !config.root.is_dir() {
        return Err(OptxError::Io {
            path: config.root.clone(),
            message: "Package root is not a directory".to_string(),
        });
    }

    printer.status(
        "Reading",
        &format!(
            "{} {}",
            display_path(&config.root),
            printer.dim(&format!("({})", config.batch.extract.package))
        ),
    );

    let selected = select_categories(&config.root, &config.batch.categories);
    for category in &selected {
        printer.info("Found", &printer.cyan(category.dir_name()));
    }

    let report = run_batch(&config.root, &config.batch)?;
    print_report(&report, printer);

    Ok(())
}

fn print_report(report: &BatchReport, printer: &Printer) {
    for category in &report.reports {
        printer.status(
            "Wrote",
            &format!(
                "{} {}",
                display_path(&category.output),
                printer.dim(&format!("({})", plural(category.records, "record", "records")))
            ),
        );
        if category.skipped > 0 {
            printer.warning(
                "Skipped",
                &format!(
                    "{} in {}",
                    plural(category.skipped, "document", "documents"),
                    category.category
                ),
            );
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{}, {} in {:.2}s",
            plural(report.reports.len(), "category", "categories"),
            plural(report.total_records(), "record", "records"),
            report.elapsed.as_secs_f64()
        ),
    );
}

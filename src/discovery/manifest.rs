//! Extraction manifest (optx.yaml) parsing.
//!
//! The manifest holds defaults for a run: where to write output, which
//! package label to use and which categories to extract. Command-line flags
//! override anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{OptxError, Result};

/// The name of the manifest file looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "optx.yaml";

/// Extraction manifest loaded from optx.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for the JSON files.
    pub output: PathBuf,

    /// Package label used in output file names.
    pub package: Option<String>,

    /// Worker threads. Defaults to one per category job.
    pub jobs: Option<usize>,

    /// Category labels to extract. Empty means every category present.
    pub categories: Vec<String>,

    /// Skip documents that fail to parse instead of aborting.
    pub skip_invalid: bool,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            package: None,
            jobs: None,
            categories: vec![],
            skip_invalid: false,
        }
    }
}

impl Manifest {
    /// Load manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| OptxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `optx.yaml` from `dir` if it exists.
    pub fn find(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| OptxError::Manifest {
            message: e.to_string(),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;

        if manifest.jobs == Some(0) {
            return Err(OptxError::Manifest {
                message: "jobs must be at least 1".to_string(),
                help: None,
            });
        }
        manifest.category_filter()?;

        Ok(manifest)
    }

    /// The categories named in the manifest, validated.
    pub fn category_filter(&self) -> Result<Vec<Category>> {
        self.categories
            .iter()
            .map(|label| {
                label.parse::<Category>().map_err(|e| match e {
                    OptxError::Usage { message, help } => OptxError::Manifest { message, help },
                    other => other,
                })
            })
            .collect()
    }
}

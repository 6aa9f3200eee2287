use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for optx operations
#[derive(Error, Diagnostic, Debug)]
pub enum OptxError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(optx::io))]
    Io { path: PathBuf, message: String },

    #[error("Invalid document {path}: {source}")]
    #[diagnostic(code(optx::document))]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(optx::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Usage error: {message}")]
    #[diagnostic(code(optx::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Batch error: {message}")]
    #[diagnostic(code(optx::batch))]
    Batch {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl OptxError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        OptxError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Schema violations found while reading a single XML document.
///
/// These carry no file path; the pipeline attaches it when wrapping
/// into [`OptxError::Document`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("missing element <{0}>")]
    MissingElement(String),

    #[error("invalid flag {value:?} in <{element}>, expected \"true\" or \"false\"")]
    InvalidFlag { element: String, value: String },

    #[error("invalid number {value:?} in <{element}>")]
    InvalidNumber { element: String, value: String },

    #[error("failed to read chart {path}: {message}")]
    Chart { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, OptxError>;

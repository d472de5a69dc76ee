//! Error types for header generation

use std::path::PathBuf;

use crate::line::LineError;

/// Errors produced while scanning, transforming or writing shader sources.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("Failed to read input directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read shader source {path:?}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Shader source {0:?} has no usable file stem")]
    InvalidFileName(PathBuf),

    #[error("{path:?} line {line_number}: {source}")]
    Line {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: LineError,
    },

    #[error("Failed to write header {path:?}: {source}")]
    WriteHeader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to format header: {0}")]
    Format(#[from] std::fmt::Error),
}

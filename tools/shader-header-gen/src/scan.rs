//! Input directory scanning and shader loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::line::split_raw_lines;
use crate::model::ShaderSource;

/// List every entry directly inside `dir`, in directory listing order.
///
/// Entries are not filtered: subdirectories are returned too and will fail
/// once loaded.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let read_dir_err = |source| GenError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        tracing::debug!("Found shader source {:?}", path);
        entries.push(path);
    }

    tracing::info!("Scanned {} shader sources in {:?}", entries.len(), dir);
    Ok(entries)
}

/// Read one shader file and split it into raw lines.
pub fn load_source(path: &Path) -> Result<ShaderSource, GenError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| GenError::InvalidFileName(path.to_path_buf()))?
        .to_string();

    let text = fs::read_to_string(path).map_err(|source| GenError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ShaderSource {
        path: path.to_path_buf(),
        stem,
        lines: split_raw_lines(&text),
    })
}

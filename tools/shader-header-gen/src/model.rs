//! Intermediate representation between shader files and the generated header

use std::path::PathBuf;

use crate::error::GenError;
use crate::line::{transform_line, HeaderOptions};

/// One shader file as read from the input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub path: PathBuf,
    /// File name without its extension; becomes the constant identifier
    pub stem: String,
    /// Raw lines, each with its terminator when the file had one
    pub lines: Vec<String>,
}

/// A `static const GLchar __<identifier>[]` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedConstant {
    pub identifier: String,
    pub rows: Vec<String>,
}

impl EmittedConstant {
    /// Transform every line of `source` into a literal row.
    pub fn from_source(source: &ShaderSource, options: &HeaderOptions) -> Result<Self, GenError> {
        let rows = source
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                transform_line(line, options).map_err(|source_err| GenError::Line {
                    path: source.path.clone(),
                    line_number: i + 1,
                    source: source_err,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            identifier: source.stem.clone(),
            rows,
        })
    }

    /// Name of the C array, e.g. `__basic` for `basic.vert`.
    pub fn c_name(&self) -> String {
        format!("__{}", self.identifier)
    }
}

/// Everything that ends up in `shader_sources.h`, in scan order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDocument {
    pub constants: Vec<EmittedConstant>,
}

impl HeaderDocument {
    pub fn row_count(&self) -> usize {
        self.constants.iter().map(|c| c.rows.len()).sum()
    }
}

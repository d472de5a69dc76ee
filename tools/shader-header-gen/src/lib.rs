//! Shader header generator library
//!
//! Turns a flat directory of GLSL sources into `shader_sources.h`, a C header
//! holding one `static const GLchar __<stem>[]` string per shader so the
//! native renderer can build its programs without touching the filesystem.

pub mod error;
pub mod header;
pub mod line;
pub mod model;
pub mod scan;

use std::path::{Path, PathBuf};

pub use error::GenError;
pub use header::{generate_header, write_header, HEADER_FILE_NAME};
pub use line::{HeaderOptions, LineError, OverflowPolicy, TerminatorPolicy, PADDING_BUDGET};
pub use model::{EmittedConstant, HeaderDocument, ShaderSource};

/// Summary of a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub header_path: PathBuf,
    pub constants: usize,
    pub rows: usize,
}

/// Scan `input_dir` and transform every entry into a constant.
///
/// Files are read one at a time, in scan order.
pub fn render_directory(
    input_dir: &Path,
    options: &HeaderOptions,
) -> Result<HeaderDocument, GenError> {
    let mut document = HeaderDocument::default();

    for path in scan::scan_directory(input_dir)? {
        let source = scan::load_source(&path)?;
        let constant = EmittedConstant::from_source(&source, options)?;
        tracing::debug!(
            "{} -> {} ({} rows)",
            path.display(),
            constant.c_name(),
            constant.rows.len()
        );
        document.constants.push(constant);
    }

    Ok(document)
}

/// Regenerate `shader_sources.h` in `output_dir` from every file in `input_dir`.
///
/// The header is written once, after all sources were transformed; any error
/// before that leaves the previous header untouched.
pub fn generate(
    input_dir: &Path,
    output_dir: &Path,
    options: &HeaderOptions,
) -> Result<GenerateReport, GenError> {
    let document = render_directory(input_dir, options)?;
    let contents = generate_header(&document)?;
    let header_path = write_header(output_dir, &contents)?;

    let report = GenerateReport {
        header_path,
        constants: document.constants.len(),
        rows: document.row_count(),
    };

    tracing::info!(
        "Generated {} with {} constants ({} rows)",
        report.header_path.display(),
        report.constants,
        report.rows
    );

    Ok(report)
}

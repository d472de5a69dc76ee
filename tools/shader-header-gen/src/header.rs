//! C header generator

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::model::HeaderDocument;

/// Name of the generated file inside the output directory
pub const HEADER_FILE_NAME: &str = "shader_sources.h";

/// Loader header the constants are compiled against (provides `GLchar`)
pub const LOADER_INCLUDE: &str = "glad/glad.h";

pub const LICENSE_BANNER: &str = "\
/*
 * Copyright (C) 2024  Adrien ARNAUD
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */";

/// Render the full header text.
///
/// The layout is kept byte-compatible with headers already checked into
/// consuming projects, including the two spaces after the final newline.
pub fn generate_header(document: &HeaderDocument) -> Result<String, GenError> {
    let mut output = String::new();

    writeln!(output, "{}", LICENSE_BANNER)?;
    writeln!(output)?;

    // Header guard
    writeln!(output, "#pragma once")?;
    writeln!(output)?;

    writeln!(output, "#include <{}>", LOADER_INCLUDE)?;

    for constant in &document.constants {
        writeln!(output)?;
        writeln!(output, "static const GLchar {}[] =", constant.c_name())?;
        writeln!(output, "{{")?;
        for row in &constant.rows {
            writeln!(output, "{}", row)?;
        }
        writeln!(output, "}};")?;
    }

    writeln!(output)?;
    write!(output, "  ")?;

    Ok(output)
}

/// Write `contents` to [`HEADER_FILE_NAME`] inside `output_dir`, replacing
/// any previous file.
pub fn write_header(output_dir: &Path, contents: &str) -> Result<PathBuf, GenError> {
    let path = output_dir.join(HEADER_FILE_NAME);
    fs::write(&path, contents).map_err(|source| GenError::WriteHeader {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

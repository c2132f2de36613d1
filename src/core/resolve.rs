//! File-set resolution from comma-separated path/glob patterns.
//!
//! Each pattern resolves in order: an existing file is taken as-is, an
//! existing directory is scanned recursively for `.css` files, and
//! anything else is expanded as a glob. Directories never appear in
//! the result. Duplicates across overlapping patterns are kept.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Expands a comma-separated pattern string into a flat, ordered list
/// of file paths. A pattern matching nothing contributes zero files.
pub fn resolve_patterns(files_input: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in files_input.split(',').map(str::trim) {
        let path = Path::new(pattern);

        if path.is_file() {
            files.push(path.to_path_buf());
        } else if path.is_dir() {
            expand_glob(&format!("{}/**/*.css", pattern), pattern, &mut files)?;
        } else {
            expand_glob(pattern, pattern, &mut files)?;
        }
    }

    Ok(files)
}

fn expand_glob(glob_pattern: &str, source_pattern: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let paths = glob::glob(glob_pattern)
        .map_err(|e| Error::glob_invalid_pattern(source_pattern, e.to_string()))?;

    for entry in paths {
        let path = entry.map_err(|e| {
            Error::glob_read_failed(source_pattern, e.path().display().to_string(), e.to_string())
        })?;

        // Leaf files only; a directory can match a name pattern too
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(())
}

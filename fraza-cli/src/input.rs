//! Input pattern resolution and file reading

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths, sorted and deduplicated.
///
/// Zero matches across all patterns is an error: silently processing
/// nothing would look like success.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInput(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

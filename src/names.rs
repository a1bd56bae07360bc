//! Names file loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::AppError;

/// Parses names file content: one name per line, trimmed, blank lines dropped.
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads names from `path`.
///
/// # Errors
/// * `AppError::NamesFileNotFound` - The file does not exist; callers treat
///   this as an empty name list
/// * `AppError::FileRead` - Any other read failure
pub fn load_names(path: &Path) -> Result<Vec<String>, AppError> {
    let display_path = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_names(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::names_file_not_found(display_path))
        }
        Err(e) => Err(AppError::file_read(display_path, e)),
    }
}

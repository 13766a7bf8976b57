//! Utility functions for error handling
//!
//! Helpers that open dataset and settings files with useful error context.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ConsentError, Result};

/// Safely read a file to a string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(ConsentError::io_error(format!(
            "File not found: {} (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(ConsentError::io_error(format!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        )));
    }

    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
                io::ErrorKind::InvalidData => "File is not valid UTF-8",
                _ => "Failed to read file",
            };
            Err(ConsentError::io_error_with_source(
                format!("{context}: {} (for: {purpose})", path.display()),
                e,
            ))
        }
    }
}

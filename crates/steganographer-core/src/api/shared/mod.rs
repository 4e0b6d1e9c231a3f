mod password;
mod progress;

use std::path::Path;

use crate::{Result, SteganoError};

pub use password::*;
pub use progress::ProgressSink;
pub(crate) use progress::run_in_background;

/// `path` must be an existing directory
pub fn check_output_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    Err(SteganoError::InvalidOutputPath(path.to_path_buf()))
}

/// `path` must not be a directory, and its parent folder must exist
pub fn check_output_image_path(path: &Path) -> Result<()> {
    if path.is_dir() || path.file_name().is_none() {
        return Err(SteganoError::InvalidOutputPath(path.to_path_buf()));
    }
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.is_dir() => Ok(()),
        _ => Err(SteganoError::InvalidOutputPath(path.to_path_buf())),
    }
}

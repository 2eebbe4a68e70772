//! Real file system backend.

use std::path::Path;

use super::types::{FileSystem, FsError};

/// Reads and writes go straight to the host file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFs {
    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path, "open"))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        std::fs::write(path, content).map_err(|e| FsError::from_io(e, path, "write"))
    }
}

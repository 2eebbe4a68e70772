//! File System Types
//!
//! Core types and traits for reading build files and writing their
//! translations.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{}'", path.display())]
    NotFound { path: PathBuf, operation: String },

    #[error("{operation} '{}': {message}", path.display())]
    Io {
        path: PathBuf,
        operation: String,
        message: String,
    },
}

impl FsError {
    /// Map an `io::Error` for `path`, keeping missing files distinguishable.
    pub fn from_io(err: io::Error, path: &Path, operation: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound {
                path: path.to_path_buf(),
                operation: operation.to_string(),
            },
            _ => FsError::Io {
                path: path.to_path_buf(),
                operation: operation.to_string(),
                message: err.to_string(),
            },
        }
    }

    pub fn not_found(path: &Path, operation: &str) -> Self {
        FsError::NotFound {
            path: path.to_path_buf(),
            operation: operation.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

/// Abstract filesystem interface used by the converter.
///
/// Each call acquires and releases its resources before returning.
pub trait FileSystem {
    /// Read the contents of a file as a string
    fn read_file(&self, path: &Path) -> Result<String, FsError>;

    /// Write content to a file, creating or truncating it
    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        (**self).write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = FsError::from_io(
            io::Error::from(io::ErrorKind::NotFound),
            Path::new("/a/CMakeLists.txt"),
            "open",
        );
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "ENOENT: no such file or directory, open '/a/CMakeLists.txt'"
        );
    }

    #[test]
    fn test_from_io_other() {
        let err = FsError::from_io(
            io::Error::from(io::ErrorKind::PermissionDenied),
            Path::new("/a/meson.build"),
            "write",
        );
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("write '/a/meson.build': "));
    }
}

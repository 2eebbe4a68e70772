//! Overlay File System
//!
//! Copy-on-write over another file system: reads fall through to the lower
//! layer unless the path has been written, and writes never reach it.

use std::path::{Path, PathBuf};

use super::in_memory_fs::InMemoryFs;
use super::types::{FileSystem, FsError};

pub struct OverlayFs<F> {
    lower: F,
    upper: InMemoryFs,
}

impl<F: FileSystem> OverlayFs<F> {
    pub fn new(lower: F) -> Self {
        Self {
            lower,
            upper: InMemoryFs::new(),
        }
    }

    pub fn lower(&self) -> &F {
        &self.lower
    }

    /// Paths written through the overlay, sorted.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.upper.paths()
    }
}

impl<F: FileSystem> FileSystem for OverlayFs<F> {
    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        match self.upper.get(path) {
            Some(content) => Ok(content),
            None => self.lower.read_file(path),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        self.upper.write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_fall_through() {
        let lower = InMemoryFs::with_files([("p/CMakeLists.txt", "project(A)")]);
        let overlay = OverlayFs::new(&lower);
        assert_eq!(overlay.read_file(Path::new("p/CMakeLists.txt")).unwrap(), "project(A)");
    }

    #[test]
    fn test_writes_stay_in_upper_layer() {
        let lower = InMemoryFs::with_files([("p/meson.build", "old\n")]);
        let overlay = OverlayFs::new(&lower);
        overlay.write_file(Path::new("p/meson.build"), "new\n").unwrap();

        assert_eq!(overlay.read_file(Path::new("p/meson.build")).unwrap(), "new\n");
        assert_eq!(lower.get("p/meson.build").as_deref(), Some("old\n"));
        assert_eq!(overlay.written_paths(), vec![PathBuf::from("p/meson.build")]);
    }
}

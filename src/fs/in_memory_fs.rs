//! In-Memory File System Implementation
//!
//! A pure in-memory map from normalized path to file text.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::types::{FileSystem, FsError};

/// In-memory virtual file system.
#[derive(Debug, Default)]
pub struct InMemoryFs {
    data: RwLock<BTreeMap<PathBuf, String>>,
}

impl InMemoryFs {
    /// Create a new empty in-memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial files.
    pub fn with_files<P, S>(files: impl IntoIterator<Item = (P, S)>) -> Self
    where
        P: AsRef<Path>,
        S: Into<String>,
    {
        let fs = Self::new();
        {
            let mut data = fs.write_lock();
            for (path, content) in files {
                data.insert(normalize_path(path.as_ref()), content.into());
            }
        }
        fs
    }

    /// Text of a file, if present.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_lock().get(&normalize_path(path.as_ref())).cloned()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.read_lock().contains_key(&normalize_path(path.as_ref()))
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.read_lock().keys().cloned().collect()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, BTreeMap<PathBuf, String>> {
        match self.data.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, BTreeMap<PathBuf, String>> {
        match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl FileSystem for InMemoryFs {
    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        self.get(path).ok_or_else(|| FsError::not_found(path, "open"))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), FsError> {
        self.write_lock().insert(normalize_path(path), content.to_string());
        Ok(())
    }
}

/// Collapse `.` and `..` lexically so `a/./b` and `a/b` share one entry.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    resolved.push("..");
                }
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let fs = InMemoryFs::new();
        let err = fs.read_file(Path::new("proj/CMakeLists.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_write_then_read() {
        let fs = InMemoryFs::new();
        fs.write_file(Path::new("proj/meson.build"), "project('a')\n").unwrap();
        assert_eq!(fs.read_file(Path::new("proj/meson.build")).unwrap(), "project('a')\n");
    }

    #[test]
    fn test_paths_are_normalized() {
        let fs = InMemoryFs::with_files([("proj/src/../CMakeLists.txt", "x")]);
        assert!(fs.contains("proj/./CMakeLists.txt"));
        assert_eq!(fs.paths(), vec![PathBuf::from("proj/CMakeLists.txt")]);
    }

    #[test]
    fn test_paths_sorted() {
        let fs = InMemoryFs::with_files([("b", "2"), ("a", "1")]);
        assert_eq!(fs.paths(), vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}

//! File System Module
//!
//! Provides the file-system seam the converter reads and writes through:
//! - OsFs: the host file system
//! - InMemoryFs: pure in-memory map, used by tests
//! - OverlayFs: copy-on-write over another backend, used by dry runs

pub mod types;
pub mod os_fs;
pub mod in_memory_fs;
pub mod overlay_fs;

pub use types::*;
pub use os_fs::OsFs;
pub use in_memory_fs::InMemoryFs;
pub use overlay_fs::OverlayFs;

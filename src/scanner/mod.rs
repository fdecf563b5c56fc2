//! Directory listing and catalog matching.
//!
//! This module provides the [`DirectoryLister`] trait, which abstracts reading
//! the entry names of one directory, and the [`DirectoryScanner`] that matches
//! those names against package manager catalogs.
//!
//! # Available Listers
//!
//! | Lister | Source |
//! |--------|--------|
//! | [`FsLister`] | The real filesystem, via `tokio::fs` |
//! | [`MemoryLister`] | A fixed in-memory tree |
//!
//! # Example
//!
//! ```
//! use pmdetect::{Catalogs, scanner::{DirectoryScanner, MemoryLister}};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let lister = MemoryLister::new().with_dir("/usr/bin", ["apt", "snap", "ls"]);
//!     let scanner = DirectoryScanner::with_lister(lister);
//!
//!     let (official, alternative) = scanner
//!         .scan_directory_all(Path::new("/usr/bin"), &Catalogs::default())
//!         .await?;
//!     assert!(official.contains("apt"));
//!     assert!(alternative.contains("snap"));
//!     Ok(())
//! }
//! ```

mod directory;
mod fs;
mod memory;

pub use directory::{DirectoryScanner, DEFAULT_SCAN_TIMEOUT};
pub use fs::FsLister;
pub use memory::MemoryLister;

use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Trait for reading the immediate entry names of a directory.
///
/// Implementors must not recurse, filter by entry type, or follow symlinks.
/// Names that are not valid UTF-8 may be dropped.
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    /// Returns the names of the entries directly inside `directory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist, is not a directory,
    /// or cannot be read.
    async fn list(&self, directory: &Path) -> io::Result<Vec<String>>;
}

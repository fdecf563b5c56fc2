use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// An in-memory directory tree for exercising scans without a filesystem.
///
/// Directories that were never added behave like missing ones.
///
/// # Example
///
/// ```
/// use pmdetect::scanner::MemoryLister;
///
/// let lister = MemoryLister::new()
///     .with_dir("/usr/bin", ["apt", "ls"])
///     .with_dir("/snap/bin", ["snap"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLister {
    dirs: HashMap<PathBuf, Vec<String>>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir<I, S>(mut self, directory: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs.insert(
            directory.into(),
            entries.into_iter().map(Into::into).collect(),
        );
        self
    }
}

#[async_trait]
impl super::DirectoryLister for MemoryLister {
    async fn list(&self, directory: &Path) -> io::Result<Vec<String>> {
        self.dirs.get(directory).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", directory.display()),
            )
        })
    }
}

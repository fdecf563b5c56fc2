use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::trace;

/// Lists directories on the real filesystem.
///
/// Entries of every type are returned. Symlinks are not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

#[async_trait]
impl super::DirectoryLister for FsLister {
    async fn list(&self, directory: &Path) -> io::Result<Vec<String>> {
        let mut entries = fs::read_dir(directory).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                // Cannot equal any catalog name
                Err(raw) => trace!(directory = %directory.display(), name = ?raw, "skipping non-UTF-8 entry"),
            }
        }

        Ok(names)
    }
}

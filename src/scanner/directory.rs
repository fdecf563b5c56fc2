use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use super::{DirectoryLister, FsLister};
use crate::error::ScanError;
use crate::model::{Catalog, Catalogs};

/// Default upper bound on listing a single directory.
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_millis(5000);

/// Matches the entries of one directory against package manager catalogs.
///
/// # Example
///
/// ```no_run
/// use pmdetect::{Catalog, scanner::DirectoryScanner};
/// use std::path::Path;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let scanner = DirectoryScanner::new();
///     let found = scanner
///         .scan_directory(Path::new("/usr/bin"), &Catalog::official())
///         .await?;
///     println!("{:?}", found);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryScanner<L = FsLister> {
    lister: L,
    timeout: Duration,
}

impl DirectoryScanner<FsLister> {
    pub fn new() -> Self {
        Self::with_lister(FsLister)
    }
}

impl Default for DirectoryScanner<FsLister> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DirectoryLister> DirectoryScanner<L> {
    pub fn with_lister(lister: L) -> Self {
        Self {
            lister,
            timeout: DEFAULT_SCAN_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the entry names of `directory` that appear in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::DirectoryUnreadable`] if the directory cannot be
    /// listed, or [`ScanError::Timeout`] if listing takes too long.
    pub async fn scan_directory(
        &self,
        directory: &Path,
        catalog: &Catalog,
    ) -> Result<BTreeSet<String>, ScanError> {
        let listing = self.listing(directory).await?;
        Ok(match_catalog(&listing, catalog))
    }

    /// Lists `directory` once and matches it against both catalogs.
    ///
    /// Returns `(official, alternative)`.
    pub async fn scan_directory_all(
        &self,
        directory: &Path,
        catalogs: &Catalogs,
    ) -> Result<(BTreeSet<String>, BTreeSet<String>), ScanError> {
        let listing = self.listing(directory).await?;
        let official = match_catalog(&listing, &catalogs.official);
        let alternative = match_catalog(&listing, &catalogs.alternative);

        debug!(
            directory = %directory.display(),
            entries = listing.len(),
            official = official.len(),
            alternative = alternative.len(),
            "scanned directory"
        );

        Ok((official, alternative))
    }

    async fn listing(&self, directory: &Path) -> Result<Vec<String>, ScanError> {
        match timeout(self.timeout, self.lister.list(directory)).await {
            Ok(Ok(names)) => Ok(names),
            Ok(Err(source)) => Err(ScanError::unreadable(directory, source)),
            Err(_) => Err(ScanError::Timeout {
                path: directory.to_path_buf(),
                timeout: self.timeout,
            }),
        }
    }
}

fn match_catalog(listing: &[String], catalog: &Catalog) -> BTreeSet<String> {
    listing
        .iter()
        .filter(|name| catalog.contains(name))
        .cloned()
        .collect()
}

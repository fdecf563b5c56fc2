//! Search path driven detection.
//!
//! [`report`] reads `PATH`, scans every directory against both catalogs and
//! returns a [`DetectionResult`]. A directory that cannot be read is logged and
//! recorded in [`DetectionResult::failures`]; it never stops the scan.
//!
//! # Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() {
//!     let result = pmdetect::report().await;
//!     println!("official: {:?}", result.official);
//!     println!("alternative: {:?}", result.alternative);
//! }
//! ```

use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ScanError;
use crate::model::{Catalogs, DetectionResult, ScanFailure};
use crate::platform::{current_search_path, enumerate_search_path};
use crate::scanner::{DirectoryLister, DirectoryScanner, FsLister};

/// Default number of directories listed at once in parallel mode.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

type DirectoryMatches = (BTreeSet<String>, BTreeSet<String>);

/// Detects package managers on the current `PATH` with the built-in catalogs.
pub async fn report() -> DetectionResult {
    Reporter::new().report().await
}

/// Drives a scan of a search path with injected catalogs and lister.
///
/// # Example
///
/// ```
/// use pmdetect::{Catalog, CatalogKind, Catalogs, Reporter, scanner::MemoryLister};
/// use std::ffi::OsStr;
///
/// #[tokio::main]
/// async fn main() {
///     let lister = MemoryLister::new()
///         .with_dir("/a", ["tool", "other"])
///         .with_dir("/b", ["tool"]);
///     let catalogs = Catalogs::new(
///         Catalog::new(CatalogKind::Official, ["tool"]),
///         Catalog::new(CatalogKind::Alternative, ["other"]),
///     );
///
///     let result = Reporter::with_lister(lister)
///         .with_catalogs(catalogs)
///         .report_path(OsStr::new("/a:/b"))
///         .await;
///
///     assert_eq!(result.official.len(), 1);
///     assert_eq!(result.alternative.len(), 1);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Reporter<L = FsLister> {
    scanner: DirectoryScanner<L>,
    catalogs: Catalogs,
    parallel: bool,
    max_concurrency: usize,
}

impl Reporter<FsLister> {
    pub fn new() -> Self {
        Self::with_lister(FsLister)
    }

    /// Builds a filesystem reporter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_catalogs(config.catalogs())
            .with_timeout(config.timeout())
            .parallel(config.parallel)
            .max_concurrency(config.max_concurrency)
    }
}

impl Default for Reporter<FsLister> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DirectoryLister> Reporter<L> {
    pub fn with_lister(lister: L) -> Self {
        Self {
            scanner: DirectoryScanner::with_lister(lister),
            catalogs: Catalogs::default(),
            parallel: true,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_catalogs(mut self, catalogs: Catalogs) -> Self {
        self.catalogs = catalogs;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.scanner = self.scanner.with_timeout(timeout);
        self
    }

    /// Scan directories concurrently (default) or one at a time.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Values below 1 are treated as 1.
    pub fn max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Scans the directories named by the process `PATH`.
    pub async fn report(&self) -> DetectionResult {
        self.report_directories(&current_search_path()).await
    }

    /// Scans the directories named by a raw search path value.
    pub async fn report_path(&self, path_variable: &OsStr) -> DetectionResult {
        self.report_directories(&enumerate_search_path(path_variable))
            .await
    }

    /// Scans `directories` in order and merges their matches.
    pub async fn report_directories(&self, directories: &[PathBuf]) -> DetectionResult {
        debug!(
            directories = directories.len(),
            parallel = self.parallel,
            "starting search path scan"
        );

        let outcomes = if self.parallel && directories.len() > 1 {
            self.scan_concurrent(directories).await
        } else {
            self.scan_sequential(directories).await
        };

        let mut official = Vec::new();
        let mut alternative = Vec::new();
        let mut failures = Vec::new();

        for (directory, outcome) in outcomes {
            match outcome {
                Ok((found_official, found_alternative)) => {
                    official.extend(found_official);
                    alternative.extend(found_alternative);
                }
                Err(e) => {
                    warn!(directory = %directory.display(), error = %e, "skipping search path directory");
                    failures.push(ScanFailure::new(directory, &e));
                }
            }
        }

        let mut result = DetectionResult::new(prune(official), prune(alternative));
        result.failures = failures;
        result.directories_scanned = directories.len();
        result
    }

    /// Lists up to `max_concurrency` directories at once, keeping search path order.
    async fn scan_concurrent(
        &self,
        directories: &[PathBuf],
    ) -> Vec<(PathBuf, Result<DirectoryMatches, ScanError>)> {
        stream::iter(directories)
            .map(|directory| self.scan_one(directory))
            .buffered(self.max_concurrency)
            .collect()
            .await
    }

    async fn scan_sequential(
        &self,
        directories: &[PathBuf],
    ) -> Vec<(PathBuf, Result<DirectoryMatches, ScanError>)> {
        let mut outcomes = Vec::with_capacity(directories.len());
        for directory in directories {
            outcomes.push(self.scan_one(directory).await);
        }
        outcomes
    }

    async fn scan_one(&self, directory: &Path) -> (PathBuf, Result<DirectoryMatches, ScanError>) {
        let outcome = self
            .scanner
            .scan_directory_all(directory, &self.catalogs)
            .await;
        (directory.to_path_buf(), outcome)
    }
}

/// Collapses accumulated matches into a set, whatever their order.
fn prune(names: Vec<String>) -> BTreeSet<String> {
    names.into_iter().collect()
}

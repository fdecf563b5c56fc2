use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use super::CatalogKind;
use crate::error::ScanError;

/// A search path directory that could not be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    pub directory: PathBuf,
    pub reason: String,
}

impl ScanFailure {
    pub fn new(directory: impl Into<PathBuf>, error: &ScanError) -> Self {
        Self {
            directory: directory.into(),
            reason: error.to_string(),
        }
    }
}

/// The outcome of one detection run.
///
/// `official` and `alternative` never contain repeated names. They are kept
/// sorted for stable output, but callers should treat them as sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub official: BTreeSet<String>,
    pub alternative: BTreeSet<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failures: Vec<ScanFailure>,
    pub directories_scanned: usize,
    pub scan_time: DateTime<Utc>,
}

impl DetectionResult {
    pub fn new(official: BTreeSet<String>, alternative: BTreeSet<String>) -> Self {
        Self {
            official,
            alternative,
            failures: Vec::new(),
            directories_scanned: 0,
            scan_time: Utc::now(),
        }
    }

    pub fn get(&self, kind: CatalogKind) -> &BTreeSet<String> {
        match kind {
            CatalogKind::Official => &self.official,
            CatalogKind::Alternative => &self.alternative,
        }
    }

    /// True when no package manager was found in either catalog.
    pub fn is_empty(&self) -> bool {
        self.official.is_empty() && self.alternative.is_empty()
    }

    pub fn total(&self) -> usize {
        self.official.len() + self.alternative.len()
    }

    /// Compares only the detected names, ignoring failures and timing.
    pub fn same_detections(&self, other: &DetectionResult) -> bool {
        self.official == other.official && self.alternative == other.alternative
    }
}

//! Core data types for catalogs and detection results.
//!
//! - [`Catalog`] - A named list of package manager binaries
//! - [`CatalogKind`] - Official or alternative
//! - [`DetectionResult`] - What a report found
//!
//! # Example
//!
//! ```
//! use pmdetect::{Catalog, DetectionResult};
//! use std::collections::BTreeSet;
//!
//! let official: BTreeSet<String> = ["apt".to_string()].into();
//! let result = DetectionResult::new(official, BTreeSet::new());
//!
//! assert!(result.official.iter().all(|n| Catalog::official().contains(n)));
//! ```

mod catalog;
mod detection;

pub use catalog::*;
pub use detection::*;

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod platform;
pub mod report;
pub mod scanner;

pub use config::Config;
pub use error::{ConfigError, ScanError};
pub use model::{Catalog, CatalogKind, Catalogs, DetectionResult, ScanFailure};
pub use report::{report, Reporter};
pub use scanner::{DirectoryLister, DirectoryScanner};

//! Configuration file handling.
//!
//! This module provides loading and saving of pmdetect configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/pmdetect/config.toml`
//! - macOS: `~/Library/Application Support/pmdetect/config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! timeout_ms = 5000
//! max_concurrency = 8
//! parallel = true
//! default_format = "table"
//!
//! [catalogs]
//! extra_official = ["emerge"]
//! extra_alternative = ["nix-env", "pkgx"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::model::{Catalog, CatalogKind, Catalogs};
use crate::platform::config_dir;
use crate::report::DEFAULT_MAX_CONCURRENCY;
use crate::scanner::DEFAULT_SCAN_TIMEOUT;

/// Application configuration.
///
/// # Example
///
/// ```no_run
/// use pmdetect::Config;
///
/// // Load from file (or use defaults if file doesn't exist)
/// let config = Config::load().unwrap();
///
/// println!("Timeout: {}ms", config.timeout_ms);
/// println!("Parallel: {}", config.parallel);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long to wait for a single directory listing, in milliseconds.
    ///
    /// Default: 5000
    pub timeout_ms: u64,

    /// Maximum number of directories listed at once.
    ///
    /// Default: 8
    pub max_concurrency: usize,

    /// Whether to scan search path directories concurrently.
    ///
    /// Default: true
    pub parallel: bool,

    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "table", "json"
    /// Default: "table"
    pub default_format: String,

    /// Changes to the built-in catalogs.
    #[serde(default)]
    pub catalogs: CatalogConfig,
}

/// Extends or replaces the built-in package manager catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Names appended to the official catalog.
    pub extra_official: Vec<String>,

    /// Names appended to the alternative catalog.
    pub extra_alternative: Vec<String>,

    /// Replaces the built-in official catalog before extras are applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_official: Option<Vec<String>>,

    /// Replaces the built-in alternative catalog before extras are applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_alternative: Option<Vec<String>>,
}

impl CatalogConfig {
    fn build(&self, kind: CatalogKind) -> Catalog {
        let (replacement, extra) = match kind {
            CatalogKind::Official => (&self.replace_official, &self.extra_official),
            CatalogKind::Alternative => (&self.replace_alternative, &self.extra_alternative),
        };

        let base = match (replacement, kind) {
            (Some(names), _) => Catalog::new(kind, names.iter().cloned()),
            (None, CatalogKind::Official) => Catalog::official(),
            (None, CatalogKind::Alternative) => Catalog::alternative(),
        };

        base.extended(extra.iter().cloned())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_SCAN_TIMEOUT.as_millis() as u64,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            parallel: true,
            default_format: "table".to_string(),
            catalogs: CatalogConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from a specific file, which must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses configuration from TOML text. Missing keys take default values.
    ///
    /// # Example
    ///
    /// ```
    /// use pmdetect::Config;
    ///
    /// let config = Config::from_toml_str("parallel = false").unwrap();
    /// assert!(!config.parallel);
    /// assert_eq!(config.default_format, "table");
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Saves the configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        fs::write(path, Self::render(self)).map_err(write_err)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// The effective catalogs after replacements and extras.
    pub fn catalogs(&self) -> Catalogs {
        Catalogs::new(
            self.catalogs.build(CatalogKind::Official),
            self.catalogs.build(CatalogKind::Alternative),
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        Self::render(&Config::default())
    }

    fn render(config: &Config) -> String {
        toml::to_string_pretty(config).unwrap_or_default()
    }
}

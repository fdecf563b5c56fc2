//! Error types for scanning and configuration.
//!
//! A [`ScanError`] is always scoped to a single directory. The report logs it,
//! records it as a failure, and moves on to the next search path entry.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while listing one search path directory.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Missing, not a directory, or permission denied.
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("timed out after {}ms listing {}", .timeout.as_millis(), .path.display())]
    Timeout { path: PathBuf, timeout: Duration },
}

impl ScanError {
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    /// The directory the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryUnreadable { path, .. } | Self::Timeout { path, .. } => path,
        }
    }
}

/// Errors loading a configuration file that exists.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_message_names_directory() {
        let err = ScanError::unreadable(
            "/nonexistent/bin",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/bin"));
        assert!(msg.contains("No such file or directory"));
        assert_eq!(err.path(), Path::new("/nonexistent/bin"));
    }

    #[test]
    fn test_timeout_message() {
        let err = ScanError::Timeout {
            path: PathBuf::from("/mnt/nfs/bin"),
            timeout: Duration::from_millis(250),
        };
        assert_eq!(err.to_string(), "timed out after 250ms listing /mnt/nfs/bin");
    }
}

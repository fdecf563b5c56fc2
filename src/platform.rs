//! Search path enumeration and platform-specific locations.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable holding the executable search path.
pub const PATH_VAR: &str = "PATH";

/// Splits a raw search path value into directories, in priority order.
///
/// An empty value yields no directories, so the working directory is never
/// scanned by accident. Empty entries inside a non-empty value are kept as
/// empty paths; listing them fails and the report records the failure.
///
/// # Example
///
/// ```
/// use pmdetect::platform::enumerate_search_path;
/// use std::ffi::OsStr;
/// use std::path::PathBuf;
///
/// let dirs = enumerate_search_path(OsStr::new("/usr/local/bin:/usr/bin"));
/// assert_eq!(dirs, vec![PathBuf::from("/usr/local/bin"), PathBuf::from("/usr/bin")]);
///
/// assert!(enumerate_search_path(OsStr::new("")).is_empty());
/// ```
pub fn enumerate_search_path(path_variable: &OsStr) -> Vec<PathBuf> {
    if path_variable.is_empty() {
        return Vec::new();
    }
    env::split_paths(path_variable).collect()
}

/// Reads `PATH` from the process environment and splits it.
///
/// Returns no directories when the variable is unset.
pub fn current_search_path() -> Vec<PathBuf> {
    match env::var_os(PATH_VAR) {
        Some(value) => enumerate_search_path(&value),
        None => Vec::new(),
    }
}

/// Returns the configuration directory for pmdetect.
///
/// Platform-specific locations:
/// - Linux: `~/.config/pmdetect/`
/// - macOS: `~/Library/Application Support/pmdetect/`
///
/// Falls back to `./pmdetect/` if no config directory can be determined.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pmdetect")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let dirs = enumerate_search_path(OsStr::new("/b:/a:/c"));
        assert_eq!(
            dirs,
            vec![PathBuf::from("/b"), PathBuf::from("/a"), PathBuf::from("/c")]
        );
    }

    #[test]
    fn test_empty_value_yields_nothing() {
        assert!(enumerate_search_path(OsStr::new("")).is_empty());
    }

    #[test]
    fn test_keeps_empty_and_repeated_entries() {
        let dirs = enumerate_search_path(OsStr::new("/bin::/bin"));
        assert_eq!(
            dirs,
            vec![PathBuf::from("/bin"), PathBuf::new(), PathBuf::from("/bin")]
        );
    }

    #[test]
    fn test_single_entry() {
        let dirs = enumerate_search_path(OsStr::new("relative/bin"));
        assert_eq!(dirs, vec![PathBuf::from("relative/bin")]);
    }

    #[test]
    fn test_config_dir_ends_with_crate_name() {
        assert!(config_dir().ends_with("pmdetect"));
    }
}

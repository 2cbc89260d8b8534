//! Typed configuration derived from host options.

use std::fmt::{self, Debug, Formatter};
use std::path::{Path, PathBuf};

/// Name of the marker subdirectory inside the host temp dir.
pub const MARKER_DIR_NAME: &str = "BannedFiles";

/// Configured set of banned file-name extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedExtensions {
    entries: Vec<String>,
    case_sensitive: bool,
}

impl BannedExtensions {
    /// Build the set from bare (dot-less) suffixes.
    #[must_use]
    pub fn new(entries: Vec<String>, case_sensitive: bool) -> Self {
        let entries = if case_sensitive {
            entries
        } else {
            entries
                .into_iter()
                .map(|entry| entry.to_lowercase())
                .collect()
        };
        Self {
            entries,
            case_sensitive,
        }
    }

    /// Whether nothing is banned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether extensions are compared with exact case.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Configured suffixes rendered with their leading dot.
    #[must_use]
    pub fn display_list(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!(".{entry}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the file name's extension is banned.
    ///
    /// Only the final suffix counts, and names such as `.nfo` have no extension.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        let Some(extension) = Path::new(file_name)
            .extension()
            .and_then(|extension| extension.to_str())
        else {
            return false;
        };
        if self.case_sensitive {
            self.entries.iter().any(|entry| entry.as_str() == extension)
        } else {
            self.entries.contains(&extension.to_lowercase())
        }
    }
}

/// Connection facts for the host's control endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct ControlEndpoint {
    /// Address the control server listens on (wildcard already mapped to loopback).
    pub host: String,
    /// TCP port of the control server.
    pub port: u16,
    /// Control username.
    pub username: String,
    /// Control password.
    pub password: String,
}

impl Debug for ControlEndpoint {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ControlEndpoint")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Options the hook needs beyond the invocation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Extensions that convict a download.
    pub banned: BannedExtensions,
    /// Directory holding per-download marker files.
    pub marker_dir: PathBuf,
    /// Host control endpoint.
    pub control: ControlEndpoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str], case_sensitive: bool) -> BannedExtensions {
        BannedExtensions::new(
            entries.iter().map(|entry| (*entry).to_string()).collect(),
            case_sensitive,
        )
    }

    #[test]
    fn matching_is_case_insensitive_by_default() {
        let banned = set(&["NFO", "wmv"], false);
        assert!(banned.matches("readme.nfo"));
        assert!(banned.matches("clip.WMV"));
        assert!(!banned.matches("movie.mkv"));
        assert_eq!(banned.display_list(), ".nfo, .wmv");
    }

    #[test]
    fn case_sensitive_mode_requires_exact_suffix() {
        let banned = set(&["wmv"], true);
        assert!(banned.matches("clip.wmv"));
        assert!(!banned.matches("clip.WMV"));
        assert!(banned.case_sensitive());
    }

    #[test]
    fn only_final_suffix_is_considered() {
        let banned = set(&["exe"], false);
        assert!(!banned.matches("setup.exe.txt"));
        assert!(banned.matches("setup.txt.exe"));
        assert!(!banned.matches(".exe"));
        assert!(!banned.matches("exe"));
    }

    #[test]
    fn empty_set_never_matches() {
        let banned = BannedExtensions::default();
        assert!(banned.is_empty());
        assert!(!banned.matches("anything.nfo"));
    }

    #[test]
    fn endpoint_debug_redacts_password() {
        let endpoint = ControlEndpoint {
            host: "127.0.0.1".into(),
            port: 6789,
            username: "nzbget".into(),
            password: "tegbzn6789".into(),
        };
        let rendered = format!("{endpoint:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("tegbzn6789"));
    }
}

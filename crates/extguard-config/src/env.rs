//! Snapshot of the variables the host exports to the hook.

use std::collections::BTreeMap;

use extguard_core::PARAM_ENV_PREFIX;

/// Immutable view over the host-provided environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnv {
    vars: BTreeMap<String, String>,
}

impl HostEnv {
    /// Capture the current process environment, skipping non UTF-8 entries.
    #[must_use]
    pub fn from_process() -> Self {
        Self::from_pairs(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Build a snapshot from explicit pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Value of a variable, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Whether a variable is present, even with an empty value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Persisted per-download parameters with the `NZBPR_` prefix stripped.
    #[must_use]
    pub fn parameters(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(PARAM_ENV_PREFIX)
                    .map(|name| (name.to_string(), value.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_strip_prefix_and_skip_other_vars() {
        let env = HostEnv::from_pairs([
            ("NZBPR_PPSTATUS_BANNED", "yes"),
            ("NZBPR_BANNEDFILES_SORTED", ""),
            ("NZBPP_DIRECTORY", "/tmp"),
        ]);
        let params = env.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("PPSTATUS_BANNED").map(String::as_str),
            Some("yes")
        );
        assert_eq!(
            params.get("BANNEDFILES_SORTED").map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn contains_distinguishes_empty_from_absent() {
        let env = HostEnv::from_pairs([("NZBOP_ARTICLECACHE", "")]);
        assert!(env.contains("NZBOP_ARTICLECACHE"));
        assert_eq!(env.get("NZBOP_ARTICLECACHE"), Some(""));
        assert!(!env.contains("NZBNA_EVENT"));
    }
}

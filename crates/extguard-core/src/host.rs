//! Narrow interface over the host's persisted parameters and stdout command channel.
//!
//! # Design
//! - Core logic only sees `ParameterStore`/`HostChannel`, never the process environment.
//! - `SentinelHost` is the production implementation: it reads the `NZBPR_*` snapshot and
//!   writes `[NZB]` directives that the host parses after the process exits.
//! - Values written during an invocation are visible to later reads in the same invocation.
//! - Directive values are flattened to one line; the host reads every `[NZB]` line as a
//!   command.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{CoreError, CoreResult};

/// Parameter recording whether a banned file was found.
pub const PARAM_BANNED: &str = "PPSTATUS_BANNED";
/// Parameter recording the name of the banned file.
pub const PARAM_BANNED_FILE: &str = "PPSTATUS_BANNEDFILE";
/// Parameter recording that inner files were already reordered.
pub const PARAM_SORTED: &str = "BANNEDFILES_SORTED";
/// Environment prefix of persisted per-download parameters.
pub const PARAM_ENV_PREFIX: &str = "NZBPR_";

const SENTINEL_PREFIX: &str = "[NZB]";

/// Key/value store for parameters the host persists per download.
pub trait ParameterStore {
    /// Read a parameter by its unprefixed name.
    fn get(&self, name: &str) -> Option<&str>;

    /// Persist a parameter by its unprefixed name.
    ///
    /// # Errors
    ///
    /// Returns an error when the update cannot be delivered to the host.
    fn set(&mut self, name: &str, value: &str) -> CoreResult<()>;
}

/// Parameter store plus the queue commands the hook can issue.
pub trait HostChannel: ParameterStore {
    /// Ask the host to mark the current download as bad.
    ///
    /// # Errors
    ///
    /// Returns an error when the command cannot be delivered to the host.
    fn mark_bad(&mut self) -> CoreResult<()>;
}

/// Host channel speaking the stdout sentinel protocol.
#[derive(Debug)]
pub struct SentinelHost<W> {
    params: BTreeMap<String, String>,
    out: W,
}

impl<W: Write> SentinelHost<W> {
    /// Build a channel over the persisted parameter snapshot and an output sink.
    #[must_use]
    pub const fn new(params: BTreeMap<String, String>, out: W) -> Self {
        Self { params, out }
    }

    /// Consume the channel and hand back the output sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, directive: &str) -> CoreResult<()> {
        writeln!(self.out, "{SENTINEL_PREFIX} {directive}")
            .and_then(|()| self.out.flush())
            .map_err(|source| CoreError::HostWrite {
                directive: directive.to_string(),
                source,
            })
    }
}

impl<W: Write> ParameterStore for SentinelHost<W> {
    fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: &str) -> CoreResult<()> {
        let value = single_line(value);
        self.emit(&format!("{PARAM_ENV_PREFIX}{name}={value}"))?;
        self.params.insert(name.to_string(), value.into_owned());
        Ok(())
    }
}

fn single_line(value: &str) -> Cow<'_, str> {
    if value.contains(char::is_control) {
        Cow::Owned(
            value
                .chars()
                .map(|ch| if ch.is_control() { ' ' } else { ch })
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}

impl<W: Write> HostChannel for SentinelHost<W> {
    fn mark_bad(&mut self) -> CoreResult<()> {
        self.emit("MARK=BAD")
    }
}

//! Early-exit rules evaluated before any detection work.

use std::path::Path;

use crate::host::{PARAM_BANNED, PARAM_BANNED_FILE, ParameterStore};
use crate::model::{InvocationContext, Verdict};

/// Outcome of the gatekeeper for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The hook was invoked outside a supported host; abort with a usage error.
    Halt(HaltReason),
    /// Event unknown to this hook; exit without objection.
    Ignore,
    /// The host already rejected the download.
    AlreadyBanned {
        /// Banned file recorded by an earlier invocation, when this hook rejected it.
        banned_file: Option<String>,
    },
    /// Post-processing was requested for a directory that no longer exists.
    DirectoryMissing,
    /// The download already failed for unrelated reasons.
    AlreadyFailed,
    /// Detection should run.
    Continue,
}

/// Why the gatekeeper refused to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// Neither phase marker nor the host option set was supplied.
    UnsupportedHost,
    /// The phase was recognised but its identity fields were missing.
    MissingContext,
}

/// Apply the gatekeeper rules in order; the first match wins.
///
/// `dir_exists` probes the filesystem so the rules stay testable without disk state.
#[must_use]
pub fn evaluate<F>(
    context: &InvocationContext,
    params: &dyn ParameterStore,
    dir_exists: F,
) -> GateDecision
where
    F: Fn(&Path) -> bool,
{
    if context.phase.is_none() || !context.host_supported {
        return GateDecision::Halt(HaltReason::UnsupportedHost);
    }

    if context.event().is_some_and(|event| !event.is_known()) {
        return GateDecision::Ignore;
    }

    let Some(target) = context.target() else {
        return GateDecision::Halt(HaltReason::MissingContext);
    };

    if context.is_marked_bad() {
        let banned = Verdict::from_param(params.get(PARAM_BANNED)) == Verdict::Banned;
        let banned_file = params
            .get(PARAM_BANNED_FILE)
            .filter(|file| banned && !file.is_empty())
            .map(str::to_string);
        return GateDecision::AlreadyBanned { banned_file };
    }

    if context.is_post_process() && !dir_exists(target.directory) {
        return GateDecision::DirectoryMissing;
    }

    if context.is_failed() {
        return GateDecision::AlreadyFailed;
    }

    GateDecision::Continue
}

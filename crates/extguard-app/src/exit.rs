//! Process exit statuses understood by the host.

/// How an invocation ended, as reported to the host through the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDisposition {
    /// The hook ran to completion.
    Success,
    /// Nothing to do for this invocation.
    None,
    /// The invocation failed; the host retries on its next event.
    Error,
    /// The hook was started outside a supported host.
    Usage,
}

impl ExitDisposition {
    /// Numeric exit status for the process.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 93,
            Self::Error => 94,
            Self::None => 95,
            Self::Usage => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_host_conventions() {
        assert_eq!(ExitDisposition::Success.code(), 93);
        assert_eq!(ExitDisposition::Error.code(), 94);
        assert_eq!(ExitDisposition::None.code(), 95);
        assert_eq!(ExitDisposition::Usage.code(), 1);
    }
}

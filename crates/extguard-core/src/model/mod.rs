//! Core download and invocation domain types shared across the workspace.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// Host status value assigned once a download has been marked bad.
pub const STATUS_FAILURE_BAD: &str = "FAILURE/BAD";
/// Host total status value for downloads that failed for any reason.
pub const TOTAL_STATUS_FAILURE: &str = "FAILURE";

/// Numeric identifier the host assigns to a queued download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DownloadId(u64);

impl DownloadId {
    /// Wrap a raw host identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for DownloadId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for DownloadId {
    type Err = std::num::ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse().map(Self)
    }
}

/// Identifier of a single constituent file inside a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(u64);

impl FileId {
    /// Wrap a raw host file identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value as understood by the host.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for FileId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Queue events the hook subscribes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    /// A download was added to the queue.
    NzbAdded,
    /// One constituent file of a download finished downloading.
    FileDownloaded,
    /// All files of a download finished downloading.
    NzbDownloaded,
    /// Any event introduced by newer hosts; always ignored.
    Other(String),
}

impl QueueEvent {
    /// Parse the raw event marker supplied by the host.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "NZB_ADDED" => Self::NzbAdded,
            "FILE_DOWNLOADED" => Self::FileDownloaded,
            "NZB_DOWNLOADED" => Self::NzbDownloaded,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the event belongs to the set the hook handles.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Stage of the host lifecycle the hook was invoked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookPhase {
    /// Invoked as a queue script for the given event.
    Queue(QueueEvent),
    /// Invoked as a post-processing script after the download left the queue.
    PostProcess,
}

impl HookPhase {
    /// Queue event carried by the phase, if any.
    #[must_use]
    pub const fn event(&self) -> Option<&QueueEvent> {
        match self {
            Self::Queue(event) => Some(event),
            Self::PostProcess => None,
        }
    }

    /// Environment prefix the host uses for per-download facts in this phase.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Queue(_) => "NZBNA_",
            Self::PostProcess => "NZBPP_",
        }
    }
}

/// Everything the host told us about the current invocation.
///
/// Built once at process start and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// Lifecycle phase; `None` when neither phase marker was supplied.
    pub phase: Option<HookPhase>,
    /// Whether the host advertised the option set of a supported version.
    pub host_supported: bool,
    /// Working directory of the download.
    pub directory: Option<PathBuf>,
    /// Display name of the download.
    pub nzb_name: Option<String>,
    /// Host identifier of the download.
    pub nzb_id: Option<DownloadId>,
    /// Post-processing status (for example `FAILURE/BAD`).
    pub status: Option<String>,
    /// Aggregated post-processing status (for example `FAILURE`).
    pub total_status: Option<String>,
}

impl InvocationContext {
    /// Whether the host already rejected this download.
    #[must_use]
    pub fn is_marked_bad(&self) -> bool {
        self.status.as_deref() == Some(STATUS_FAILURE_BAD)
    }

    /// Whether the download already failed for any reason.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.total_status.as_deref() == Some(TOTAL_STATUS_FAILURE)
    }

    /// Whether the hook runs in post-processing mode.
    #[must_use]
    pub const fn is_post_process(&self) -> bool {
        matches!(self.phase, Some(HookPhase::PostProcess))
    }

    /// Queue event of the invocation, if any.
    #[must_use]
    pub fn event(&self) -> Option<&QueueEvent> {
        self.phase.as_ref().and_then(HookPhase::event)
    }

    /// The identity fields required once detection is about to run.
    #[must_use]
    pub fn target(&self) -> Option<DownloadTarget<'_>> {
        Some(DownloadTarget {
            id: self.nzb_id?,
            name: self.nzb_name.as_deref()?,
            directory: self.directory.as_deref()?,
        })
    }
}

/// Borrowed view over the identity of the download being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadTarget<'a> {
    /// Host identifier of the download.
    pub id: DownloadId,
    /// Display name of the download.
    pub name: &'a str,
    /// Working directory of the download.
    pub directory: &'a std::path::Path,
}

/// One entry of the host's per-download file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Host file identifier.
    pub id: FileId,
    /// File name as announced by the download.
    pub filename: String,
}

/// Persisted banned-file classification of a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// No verdict recorded yet.
    #[default]
    Unchecked,
    /// A previous banned verdict was explicitly cleared.
    Clean,
    /// A banned extension was found.
    Banned,
}

impl Verdict {
    /// Decode the persisted parameter value.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("yes") => Self::Banned,
            Some("") => Self::Clean,
            _ => Self::Unchecked,
        }
    }
}

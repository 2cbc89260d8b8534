//! Per-download liveness markers kept under the host temp directory.
//!
//! # Design
//! - A marker is an empty file named after the download id; nothing reads its content.
//! - Removal is best effort: failures are logged and never escalated.
//! - Planning which markers to drop is pure so it can be tested without a host.

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use extguard_core::DownloadId;
use tracing::{debug, error};

use crate::error::{FsOpsError, FsOpsResult};

/// Directory of marker files, one per recently seen download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStore {
    dir: PathBuf,
}

impl MarkerStore {
    /// Store rooted at the given marker directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the marker for a download.
    #[must_use]
    pub fn marker_path(&self, id: DownloadId) -> PathBuf {
        self.dir.join(id.to_string())
    }

    /// Record that the download was seen, creating the directory when needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory or the marker cannot be created.
    pub fn touch(&self, id: DownloadId) -> FsOpsResult<PathBuf> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| FsOpsError::io("create_marker_dir", &self.dir, err))?;
        let path = self.marker_path(id);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|err| FsOpsError::io("touch_marker", &path, err))?;
        Ok(path)
    }

    /// Names of all marker files, sorted. A missing directory holds no markers.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory exists but cannot be read.
    pub fn list(&self) -> FsOpsResult<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(FsOpsError::io("list_markers", &self.dir, err)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| FsOpsError::io("list_markers", &self.dir, err))?;
            let is_file = entry
                .file_type()
                .map_err(|err| FsOpsError::io("inspect_marker", entry.path(), err))?
                .is_file();
            if is_file {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete the named markers, returning how many were removed.
    #[must_use]
    pub fn remove_all(&self, names: &[String]) -> usize {
        let mut removed = 0;
        for name in names {
            let path = self.dir.join(name);
            debug!(path = %path.display(), "Removing temp file");
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(err) => {
                    error!(path = %path.display(), error = %err, "Could not remove temp file");
                }
            }
        }
        removed
    }
}

/// Decide which markers are stale.
///
/// A marker is stale when its download is no longer live in the queue. When
/// `finished` is set, that download has left the download queue and its marker is
/// dropped even if the host still lists it.
#[must_use]
pub fn plan_removals(
    markers: &[String],
    live: &BTreeSet<DownloadId>,
    finished: Option<DownloadId>,
) -> Vec<String> {
    let finished = finished.map(|id| id.to_string());
    markers
        .iter()
        .filter(|name| {
            let is_live = name
                .parse::<DownloadId>()
                .is_ok_and(|id| live.contains(&id));
            !is_live || finished.as_deref() == Some(name.as_str())
        })
        .cloned()
        .collect()
}

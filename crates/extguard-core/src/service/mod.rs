//! Remote control seam implemented by host API clients.

use async_trait::async_trait;

use crate::model::{DownloadId, FileId, RemoteFile};

/// Queue operations the hook needs from the host's control endpoint.
#[async_trait]
pub trait QueueControl: Send + Sync {
    /// List the constituent files of a download in the host's queue order.
    async fn list_files(&self, id: DownloadId) -> anyhow::Result<Vec<RemoteFile>>;

    /// Identifiers of every download currently known to the queue.
    async fn live_downloads(&self) -> anyhow::Result<Vec<DownloadId>>;

    /// Move one file to the front of its download's file order.
    async fn move_file_to_top(&self, file: FileId) -> anyhow::Result<()>;
}

//! One hook invocation, from gatekeeper decision to exit status.
//!
//! # Design
//! - The gatekeeper decision is computed before host options are loaded; `early_exit`
//!   settles the outcomes that need no options at all.
//! - `Hook` owns no state of its own: parameters and commands flow through the
//!   `HostChannel`, remote calls through `QueueControl`.
//! - Remote failures end the invocation; marker deletion failures never do.

use std::collections::BTreeSet;

use extguard_config::BannedExtensions;
use extguard_core::{
    DownloadId, DownloadTarget, GateDecision, HaltReason, HostChannel, InvocationContext,
    PARAM_BANNED, PARAM_BANNED_FILE, PARAM_SORTED, QueueControl, QueueEvent, Verdict, last_volume,
};
use extguard_fsops::{MarkerStore, find_banned_file, plan_removals};
use tracing::{debug, error, info, warn};

use crate::error::{AppError, AppResult};
use crate::exit::ExitDisposition;

const SORTED_YES: &str = "yes";
const BANNED_YES: &str = "yes";

/// Settle decisions that end the invocation before any host option is needed.
#[must_use]
pub fn early_exit(decision: &GateDecision) -> Option<ExitDisposition> {
    match decision {
        GateDecision::Halt(reason) => Some(halt(*reason)),
        GateDecision::Ignore => {
            debug!("event not handled by this hook");
            Some(ExitDisposition::None)
        }
        _ => None,
    }
}

fn halt(reason: HaltReason) -> ExitDisposition {
    match reason {
        HaltReason::UnsupportedHost => {
            error!("This script is supposed to be called from nzbget (14.0 or later).");
        }
        HaltReason::MissingContext => {
            error!("Download directory, name or id missing from the host environment");
        }
    }
    ExitDisposition::Usage
}

/// Detection and housekeeping for the current download.
pub struct Hook<'a> {
    context: &'a InvocationContext,
    banned: &'a BannedExtensions,
    markers: &'a MarkerStore,
    control: &'a dyn QueueControl,
}

impl<'a> Hook<'a> {
    /// Bind the hook to the invocation and its collaborators.
    #[must_use]
    pub const fn new(
        context: &'a InvocationContext,
        banned: &'a BannedExtensions,
        markers: &'a MarkerStore,
        control: &'a dyn QueueControl,
    ) -> Self {
        Self {
            context,
            banned,
            markers,
            control,
        }
    }

    /// Act on the gatekeeper decision.
    ///
    /// # Errors
    ///
    /// Returns an error when a remote call fails, the working directory cannot be read,
    /// or a directive cannot be delivered to the host.
    pub async fn run(
        &self,
        decision: GateDecision,
        host: &mut (dyn HostChannel + Send),
    ) -> AppResult<ExitDisposition> {
        if let Some(exit) = early_exit(&decision) {
            return Ok(exit);
        }
        let Some(target) = self.context.target() else {
            return Ok(halt(HaltReason::MissingContext));
        };

        match decision {
            GateDecision::AlreadyBanned { banned_file } => {
                if let Some(file) = banned_file {
                    warn!("Download contains banned extension {file}");
                }
                self.housekeep(target.id).await?;
                Ok(ExitDisposition::Success)
            }
            GateDecision::DirectoryMissing => {
                info!("Destination directory doesn't exist, exiting");
                self.housekeep(target.id).await?;
                Ok(ExitDisposition::None)
            }
            GateDecision::AlreadyFailed => {
                self.housekeep(target.id).await?;
                Ok(ExitDisposition::None)
            }
            _ => self.inspect(target, host).await,
        }
    }

    async fn inspect(
        &self,
        target: DownloadTarget<'_>,
        host: &mut (dyn HostChannel + Send),
    ) -> AppResult<ExitDisposition> {
        let name = target.name;
        let event = self.context.event();
        let reorder = match event {
            Some(QueueEvent::NzbAdded) => true,
            Some(QueueEvent::FileDownloaded) => host.get(PARAM_SORTED) != Some(SORTED_YES),
            _ => false,
        };
        if reorder {
            info!("Sorting inner files for earlier file detection in {name}");
            self.promote_last_volume(target.id).await?;
            host.set(PARAM_SORTED, SORTED_YES)
                .map_err(|err| AppError::host("mark_sorted", err))?;
            if event == Some(&QueueEvent::NzbAdded) {
                return Ok(ExitDisposition::None);
            }
        }

        if !self.context.is_post_process() {
            self.markers
                .touch(target.id)
                .map_err(|err| AppError::fsops("touch_marker", err))?;
        }
        info!("Detecting banned files in {name}");
        debug!(
            extensions = %self.banned.display_list(),
            case_sensitive = self.banned.case_sensitive(),
            "Banned extension set"
        );
        let found = find_banned_file(target.directory, self.banned)
            .map_err(|err| AppError::fsops("scan_directory", err))?;
        if let Some(file) = found {
            info!("Found file with banned extension: {file}");
            host.set(PARAM_BANNED_FILE, &file)
                .map_err(|err| AppError::host("record_banned_file", err))?;
            host.set(PARAM_BANNED, BANNED_YES)
                .map_err(|err| AppError::host("record_verdict", err))?;
            host.mark_bad()
                .map_err(|err| AppError::host("mark_bad", err))?;
        } else {
            info!("No banned files detected in {name} yet");
            if Verdict::from_param(host.get(PARAM_BANNED)) == Verdict::Banned {
                host.set(PARAM_BANNED, "")
                    .map_err(|err| AppError::host("clear_verdict", err))?;
            }
        }
        debug!("Detecting banned files completed for {name}");

        if self.context.is_post_process() {
            self.housekeep(target.id).await?;
        }
        Ok(ExitDisposition::Success)
    }

    async fn promote_last_volume(&self, id: DownloadId) -> AppResult<()> {
        let files = self
            .control
            .list_files(id)
            .await
            .map_err(|err| AppError::control("listfiles", err))?;
        if let Some(file) = last_volume(&files) {
            info!("Moving last rar-file to the top: {}", file.filename);
            self.control
                .move_file_to_top(file.id)
                .await
                .map_err(|err| AppError::control("editqueue", err))?;
        } else {
            info!("Skipping sorting since could not find any rar-files");
        }
        Ok(())
    }

    /// Drop markers of downloads that left the queue.
    async fn housekeep(&self, current: DownloadId) -> AppResult<()> {
        let markers = self
            .markers
            .list()
            .map_err(|err| AppError::fsops("list_markers", err))?;
        if markers.len() <= 1 {
            return Ok(());
        }

        let live: BTreeSet<DownloadId> = self
            .control
            .live_downloads()
            .await
            .map_err(|err| AppError::control("listgroups", err))?
            .into_iter()
            .collect();
        let finished = self.context.is_post_process().then_some(current);
        let stale = plan_removals(&markers, &live, finished);
        let removed = self.markers.remove_all(&stale);
        debug!(removed, "Housekeeping finished");
        Ok(())
    }
}

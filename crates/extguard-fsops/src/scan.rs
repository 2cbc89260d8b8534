//! Banned-extension detection over a download's working directory.

use std::path::Path;

use extguard_config::BannedExtensions;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{FsOpsError, FsOpsResult};

/// Return the first direct regular file whose extension is banned.
///
/// Subdirectories are not descended into. Entries are visited in file-name order, so a
/// repeated scan of an unchanged directory yields the same answer. Dangling links are
/// skipped.
///
/// # Errors
///
/// Returns an error when the directory itself cannot be read.
pub fn find_banned_file(
    directory: &Path,
    banned: &BannedExtensions,
) -> FsOpsResult<Option<String>> {
    if banned.is_empty() {
        return Ok(None);
    }

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
            Err(err) => return Err(FsOpsError::walkdir("scan_directory", directory, err)),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if banned.matches(&name) {
            return Ok(Some(name.into_owned()));
        }
    }
    Ok(None)
}

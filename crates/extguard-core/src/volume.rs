//! Split-archive volume detection used to pick the file worth fetching first.
//!
//! # Design
//! - Volumes are recognised by `<name>.part<N>.rar` or `<name>.r<N>`, case-insensitively.
//! - `N` is compared numerically, so `part10` outranks `part2`.
//! - Ties keep the first entry in listing order.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::RemoteFile;

static PART_RAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\.part(\d+)\.rar$").ok());
static OLD_STYLE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\.r(\d+)$").ok());

/// Extract the volume number from a split-archive file name.
#[must_use]
pub fn volume_number(filename: &str) -> Option<u64> {
    let captures = PART_RAR
        .as_ref()
        .and_then(|pattern| pattern.captures(filename))
        .or_else(|| {
            OLD_STYLE
                .as_ref()
                .and_then(|pattern| pattern.captures(filename))
        })?;
    captures.get(1)?.as_str().parse().ok()
}

/// Select the highest-numbered archive volume from a remote listing.
#[must_use]
pub fn last_volume(files: &[RemoteFile]) -> Option<&RemoteFile> {
    let mut best: Option<(u64, &RemoteFile)> = None;
    for file in files {
        let Some(number) = volume_number(&file.filename) else {
            continue;
        };
        if best.is_none_or(|(current, _)| number > current) {
            best = Some((number, file));
        }
    }
    best.map(|(_, file)| file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileId;

    fn listing(names: &[&str]) -> Vec<RemoteFile> {
        names
            .iter()
            .zip(1..)
            .map(|(name, id)| RemoteFile {
                id: FileId::new(id),
                filename: (*name).to_string(),
            })
            .collect()
    }

    #[test]
    fn volume_patterns_compile() {
        assert!(PART_RAR.is_some());
        assert!(OLD_STYLE.is_some());
    }

    #[test]
    fn part_volumes_compare_numerically() {
        let files = listing(&["a.part1.rar", "a.part2.rar", "a.part10.rar"]);
        let selected = last_volume(&files).map(|file| file.filename.as_str());
        assert_eq!(selected, Some("a.part10.rar"));
    }

    #[test]
    fn old_style_volumes_are_recognised() {
        let files = listing(&["b.r00", "b.r01", "b.r02", "b.rar"]);
        let selected = last_volume(&files).map(|file| file.filename.as_str());
        assert_eq!(selected, Some("b.r02"));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(volume_number("SHOW.PART07.RAR"), Some(7));
        assert_eq!(volume_number("show.R12"), Some(12));
    }

    #[test]
    fn non_archive_listing_selects_nothing() {
        let files = listing(&["movie.mkv", "readme.nfo", "movie.par2", "b.rar"]);
        assert!(last_volume(&files).is_none());
        assert_eq!(volume_number("archive.part1.rar.par2"), None);
    }

    #[test]
    fn ties_keep_first_listed_entry() {
        let files = listing(&["x.part03.rar", "y.part3.rar"]);
        let selected = last_volume(&files).map(|file| file.id);
        assert_eq!(selected, Some(FileId::new(1)));
    }
}

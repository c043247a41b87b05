//! Removal of stale files under the destination ROM root.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::BridgeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub files_removed: usize,
    pub dirs_removed: usize,
}

/// Delete every file under `root` that is not in `keep`, then every
/// directory left empty. `root` itself is never removed.
///
/// Must only run once all sources have been synchronized; `keep` has to
/// be complete or live files are deleted.
pub fn clean_destination(root: &Path, keep: &HashSet<PathBuf>) -> Result<CleanStats, BridgeError> {
    let mut stats = CleanStats::default();
    if !root.is_dir() {
        return Ok(stats);
    }

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() || keep.contains(entry.path()) {
            continue;
        }
        log::info!("RM file {}", entry.path().display());
        fs::remove_file(entry.path()).map_err(|e| BridgeError::io(entry.path(), e))?;
        stats.files_removed += 1;
    }

    // Children are visited before their parent, so nested empty
    // directories collapse in one pass.
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        let is_empty = fs::read_dir(path)
            .map_err(|e| BridgeError::io(path, e))?
            .next()
            .is_none();
        if is_empty {
            log::info!("RM empty dir {}", path.display());
            fs::remove_dir(path).map_err(|e| BridgeError::io(path, e))?;
            stats.dirs_removed += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "tests/clean_tests.rs"]
mod tests;

//! Incremental file copy with a record of every destination kept.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BridgeError;

/// What [`FileSynchronizer::sync`] did with one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The file was copied; carries the number of bytes written.
    Copied(u64),
    /// Destination already has the same size and is not older than the source.
    UpToDate,
    /// The source does not exist; nothing was copied or recorded.
    MissingSource,
}

/// Counters across one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub copied: usize,
    pub up_to_date: usize,
    pub missing: usize,
    pub bytes_copied: u64,
}

/// Copies ROMs and artwork into the destination tree.
///
/// Every destination whose source existed is remembered, whether it was
/// copied or already current. That set is what the cleaner keeps.
#[derive(Debug, Default)]
pub struct FileSynchronizer {
    kept: HashSet<PathBuf>,
    stats: SyncStats,
}

impl FileSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring `dest` up to date with `src`.
    ///
    /// A missing source is logged and skipped; records often point at
    /// artwork that was never scraped. The freshness check compares size
    /// and modification time only, so a same-size file with different
    /// content and a newer destination mtime is wrongly kept.
    pub fn sync(&mut self, src: &Path, dest: &Path) -> Result<SyncOutcome, BridgeError> {
        let src_meta = match fs::metadata(src) {
            Ok(meta) if meta.is_file() => meta,
            _ => {
                log::warn!("Source file does not exist: {}", src.display());
                self.stats.missing += 1;
                return Ok(SyncOutcome::MissingSource);
            }
        };

        if is_current(&src_meta, dest) {
            log::debug!("Up to date: {}", dest.display());
            self.stats.up_to_date += 1;
            self.kept.insert(dest.to_path_buf());
            return Ok(SyncOutcome::UpToDate);
        }

        log::info!("Copy {}", src.display());
        log::info!("  to {}", dest.display());
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| BridgeError::io(parent, e))?;
        }
        let bytes = fs::copy(src, dest).map_err(|e| BridgeError::io(dest, e))?;

        self.stats.copied += 1;
        self.stats.bytes_copied += bytes;
        self.kept.insert(dest.to_path_buf());
        Ok(SyncOutcome::Copied(bytes))
    }

    /// Destination paths produced or confirmed during this run.
    pub fn kept(&self) -> &HashSet<PathBuf> {
        &self.kept
    }

    pub fn stats(&self) -> SyncStats {
        self.stats
    }
}

/// Same size and destination mtime not older than the source's.
fn is_current(src_meta: &fs::Metadata, dest: &Path) -> bool {
    let Ok(dest_meta) = fs::metadata(dest) else {
        return false;
    };
    if !dest_meta.is_file() || dest_meta.len() != src_meta.len() {
        return false;
    }
    match (src_meta.modified(), dest_meta.modified()) {
        (Ok(src_time), Ok(dest_time)) => dest_time >= src_time,
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;

//! Modification-time based change detection.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::ChangeDetector;

/// Default delay between polls while waiting for changes.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A [`ChangeDetector`] that scans an explicit set of watch roots.
///
/// Each root may be a file or a directory; directories are walked
/// recursively. Unreadable entries and missing roots are skipped; a file
/// that cannot be inspected cannot report a change.
pub struct MtimeWatcher {
    roots: Vec<PathBuf>,
    poll_interval: Duration,
}

impl MtimeWatcher {
    /// Create a watcher over the given roots with the default one-second
    /// poll interval.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// The watch roots this watcher scans.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn collect_files(path: &Path, out: &mut Vec<PathBuf>) {
        if path.is_file() {
            out.push(path.to_path_buf());
        } else if path.is_dir() {
            let Ok(entries) = fs::read_dir(path) else {
                return;
            };
            for entry in entries.flatten() {
                Self::collect_files(&entry.path(), out);
            }
        }
    }

    fn mtime(path: &Path) -> Option<DateTime<Utc>> {
        fs::metadata(path)
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::from)
    }
}

impl ChangeDetector for MtimeWatcher {
    fn changed_since(&self, since: DateTime<Utc>) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for root in &self.roots {
            Self::collect_files(root, &mut files);
        }

        let changed: Vec<PathBuf> = files
            .into_iter()
            .filter(|f| Self::mtime(f).is_some_and(|mtime| mtime >= since))
            .collect();
        tracing::trace!(%since, changed = changed.len(), "scanned watch roots");
        changed
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

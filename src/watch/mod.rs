//! Watched-file change detection.
//!
//! This module provides:
//! - [`ChangeDetector`] trait, the contract a host fulfils to tell the
//!   check loop which watched files changed and how long to sleep between
//!   polls
//! - [`MtimeWatcher`], a ready-made detector that scans an explicit set of
//!   watch roots by file modification time

pub mod mtime;

pub use mtime::MtimeWatcher;

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Host-supplied change detection capability.
///
/// The check loop polls `changed_since` to decide whether a check is owed
/// at all, and again while blocked waiting for the codebase to move. This
/// trait is the seam for mocking the host in tests.
pub trait ChangeDetector: Send + Sync {
    /// Watched files modified at or after `since`. Empty means no change.
    fn changed_since(&self, since: DateTime<Utc>) -> Vec<PathBuf>;

    /// Delay between successive polls while waiting for a change.
    fn poll_interval(&self) -> Duration;
}

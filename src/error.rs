//! Error types for rungate operations.
//!
//! This module defines [`RungateError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors (missing command, pattern, or host) are raised
//!   synchronously before any I/O and never retried
//! - An unsatisfied dependency is *not* an error; it is the normal waiting
//!   state of the check loop
//! - A command exiting non-zero is not an error either: only the captured
//!   output matters. The one execution failure that surfaces is the shell
//!   itself failing to launch, which waiting cannot fix.

use thiserror::Error;

/// Core error type for rungate operations.
#[derive(Debug, Error)]
pub enum RungateError {
    /// A check was attempted on a dependency with no command configured.
    #[error("Dependency '{dependency}' has no command to run")]
    MissingCommand { dependency: String },

    /// A check was attempted on a dependency with no satisfied pattern.
    #[error("Dependency '{dependency}' has no satisfied pattern")]
    MissingPattern { dependency: String },

    /// A check was attempted before the host attached a change detector.
    #[error("Dependency '{dependency}' has no change detector attached")]
    HostNotAttached { dependency: String },

    /// The shell running the check command could not be launched.
    #[error("Failed to launch shell for command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rungate operations.
pub type Result<T> = std::result::Result<T, RungateError>;

//! rungate - gate test runs on externally-verified dependencies.
//!
//! A dependency is a named precondition verified by running a shell command
//! and matching its combined output against a regular expression. Before a
//! test run, the embedding host asks each configured dependency to ensure
//! it is satisfied; an unsatisfied dependency reports its extracted error
//! lines and blocks, polling the host's change detector, until the watched
//! file set moves and a recheck succeeds.
//!
//! # Modules
//!
//! - [`error`] - Error types and result alias
//! - [`evaluate`] - Satisfaction matching and error extraction
//! - [`gate`] - Dependency checks, builder, lifecycle hooks, gate sets
//! - [`report`] - Colorized success/failure reporting
//! - [`shell`] - Check command execution with merged output
//! - [`watch`] - Change detector contract and mtime-based implementation
//!
//! # Example
//!
//! ```
//! use regex::Regex;
//! use rungate::gate::{DependencySpec, RunHooks};
//! use rungate::watch::MtimeWatcher;
//! use std::sync::Arc;
//!
//! let mut check = DependencySpec::new()
//!     .name("search index")
//!     .command("curl -s localhost:8983/ping")
//!     .satisfied_pattern(Regex::new("OK").unwrap())
//!     .errors_pattern(Regex::new("error: (.*)").unwrap())
//!     .build();
//!
//! // The host wires in its change detection at startup...
//! check.on_init(Arc::new(MtimeWatcher::new(vec!["src".into()])));
//! assert_eq!(check.name(), Some("search index"));
//! // ...and calls `check.before_run()` ahead of every test run.
//! ```

pub mod error;
pub mod evaluate;
pub mod gate;
pub mod report;
pub mod shell;
pub mod watch;

pub use error::{Result, RungateError};

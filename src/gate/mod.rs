//! Dependency checks that gate a test run.
//!
//! This module provides:
//! - [`DependencySpec`] builder collecting the four recognized dependency
//!   fields (name, command, satisfied pattern, errors pattern)
//! - [`DependencyCheck`], the check/poll state machine
//! - [`RunHooks`] trait, the lifecycle surface a host composes explicitly
//! - [`GateSet`] for driving any number of independent checks as one unit

pub mod dependency;
pub mod set;
pub mod spec;

pub use dependency::DependencyCheck;
pub use set::GateSet;
pub use spec::DependencySpec;

use crate::error::Result;
use crate::watch::ChangeDetector;
use std::sync::Arc;

/// Lifecycle hooks the host test runner drives.
///
/// Hosts call `on_init` once with their change detection capability,
/// `before_run` ahead of every test run (the call blocks until every gated
/// dependency is satisfied), and `on_interrupt` when a run is interrupted
/// so the next run rechecks unconditionally.
pub trait RunHooks {
    /// Attach the host's change detector. Called once at host startup.
    fn on_init(&mut self, host: Arc<dyn ChangeDetector>);

    /// Ensure every gated dependency is satisfied before the run proceeds.
    fn before_run(&mut self) -> Result<()>;

    /// React to an interrupted run.
    fn on_interrupt(&mut self);
}

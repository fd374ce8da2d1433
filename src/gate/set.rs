//! A collection of independent dependency checks.

use std::sync::Arc;

use crate::error::Result;
use crate::watch::ChangeDetector;

use super::{DependencyCheck, DependencySpec, RunHooks};

/// An ordered set of independent dependency checks driven as one unit.
///
/// Members share nothing: there is no ordering contract between them
/// beyond insertion order and no dependency graph. `before_run` ensures
/// each member in turn and stops at the first configuration error.
#[derive(Default)]
pub struct GateSet {
    checks: Vec<DependencyCheck>,
}

impl GateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency to the set, returning the built check for further
    /// configuration (e.g. swapping its reporter).
    pub fn add(&mut self, spec: DependencySpec) -> &mut DependencyCheck {
        let index = self.checks.len();
        self.checks.push(spec.build());
        &mut self.checks[index]
    }

    /// The checks in insertion order.
    pub fn checks(&self) -> &[DependencyCheck] {
        &self.checks
    }

    /// Number of checks in the set.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the set has no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl RunHooks for GateSet {
    fn on_init(&mut self, host: Arc<dyn ChangeDetector>) {
        for check in &mut self.checks {
            check.on_init(Arc::clone(&host));
        }
    }

    fn before_run(&mut self) -> Result<()> {
        for check in &mut self.checks {
            check.before_run()?;
        }
        Ok(())
    }

    fn on_interrupt(&mut self) {
        for check in &mut self.checks {
            check.on_interrupt();
        }
    }
}

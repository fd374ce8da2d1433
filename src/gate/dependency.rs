//! The dependency check/poll state machine.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::Arc;
use std::thread;

use crate::error::{Result, RungateError};
use crate::report::Reporter;
use crate::watch::ChangeDetector;
use crate::{evaluate, shell};

use super::{DependencySpec, RunHooks};

/// A single gated dependency: configuration plus check state.
///
/// Constructed through [`DependencySpec`], attached to a host change
/// detector via [`RunHooks::on_init`] (or [`attach_host`]), then driven by
/// [`ensure_satisfied`] before every test run for the lifetime of the
/// orchestration process.
///
/// [`attach_host`]: DependencyCheck::attach_host
/// [`ensure_satisfied`]: DependencyCheck::ensure_satisfied
pub struct DependencyCheck {
    name: Option<String>,
    command: Option<String>,
    satisfied_pattern: Option<Regex>,
    errors_pattern: Option<Regex>,
    last_check_time: DateTime<Utc>,
    host: Option<Arc<dyn ChangeDetector>>,
    reporter: Reporter,
}

impl DependencyCheck {
    pub(crate) fn from_spec(spec: DependencySpec) -> Self {
        Self {
            name: spec.name,
            command: spec.command,
            satisfied_pattern: spec.satisfied_pattern,
            errors_pattern: spec.errors_pattern,
            last_check_time: DateTime::<Utc>::UNIX_EPOCH,
            host: None,
            reporter: Reporter::new(),
        }
    }

    /// The dependency's label, if one was configured.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The configured check command, if any.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Timestamp of the most recent check attempt; epoch until the first
    /// check runs (and again after [`reset`]).
    ///
    /// [`reset`]: DependencyCheck::reset
    pub fn last_check_time(&self) -> DateTime<Utc> {
        self.last_check_time
    }

    /// Attach the host's change detection capability.
    pub fn attach_host(&mut self, host: Arc<dyn ChangeDetector>) {
        self.host = Some(host);
    }

    /// Replace the reporter, e.g. to disable colorization or redirect
    /// reports to a different sink.
    pub fn set_reporter(&mut self, reporter: Reporter) {
        self.reporter = reporter;
    }

    /// Mutable access to the reporter.
    pub fn reporter_mut(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    /// Block until the dependency is satisfied.
    ///
    /// If no watched file changed since the last check, returns
    /// immediately without running the command. Otherwise runs the check
    /// loop: execute the command, match its combined output against the
    /// satisfied pattern, and on failure report the extracted errors and
    /// sleep until the change detector observes movement, then recheck.
    /// The loop repeats until the dependency is satisfied.
    ///
    /// Fails without any I/O when the command, satisfied pattern, or host
    /// is missing.
    pub fn ensure_satisfied(&mut self) -> Result<()> {
        let dependency = self.name.clone().unwrap_or_default();
        let command = self
            .command
            .clone()
            .ok_or_else(|| RungateError::MissingCommand {
                dependency: dependency.clone(),
            })?;
        let satisfied =
            self.satisfied_pattern
                .clone()
                .ok_or_else(|| RungateError::MissingPattern {
                    dependency: dependency.clone(),
                })?;
        let host = self
            .host
            .clone()
            .ok_or_else(|| RungateError::HostNotAttached {
                dependency: dependency.clone(),
            })?;

        if host.changed_since(self.last_check_time).is_empty() {
            tracing::debug!(dependency = %dependency, "no watched files changed; check not owed");
            return Ok(());
        }

        self.reporter.checking(&dependency);
        loop {
            self.last_check_time = Utc::now();
            let output = shell::run_merged(&command)?;

            if evaluate::is_satisfied(&output, &satisfied) {
                tracing::debug!(dependency = %dependency, "dependency satisfied");
                self.reporter.satisfied();
                return Ok(());
            }

            let errors = evaluate::extract_errors(&output, self.errors_pattern.as_ref());
            tracing::debug!(
                dependency = %dependency,
                errors = errors.len(),
                "dependency not satisfied; waiting for changes"
            );
            self.reporter.not_satisfied(&errors);
            self.wait_for_changes(host.as_ref());
            self.reporter.rechecking(&dependency);
        }
    }

    /// Rewind the last check time to epoch so the next
    /// [`ensure_satisfied`] call treats every watched file as changed.
    ///
    /// [`ensure_satisfied`]: DependencyCheck::ensure_satisfied
    pub fn reset(&mut self) {
        tracing::debug!(dependency = self.name.as_deref().unwrap_or_default(), "reset");
        self.last_check_time = DateTime::<Utc>::UNIX_EPOCH;
    }

    /// Sleep at the host's poll interval until a watched file changes.
    fn wait_for_changes(&self, host: &dyn ChangeDetector) {
        while host.changed_since(self.last_check_time).is_empty() {
            thread::sleep(host.poll_interval());
        }
    }
}

impl RunHooks for DependencyCheck {
    fn on_init(&mut self, host: Arc<dyn ChangeDetector>) {
        self.attach_host(host);
    }

    fn before_run(&mut self) -> Result<()> {
        self.ensure_satisfied()
    }

    fn on_interrupt(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Detector reporting a fixed change set on every poll.
    struct StaticDetector {
        changed: Vec<PathBuf>,
    }

    impl StaticDetector {
        fn changed() -> Self {
            Self {
                changed: vec![PathBuf::from("src/lib.rs")],
            }
        }

        fn unchanged() -> Self {
            Self { changed: Vec::new() }
        }
    }

    impl ChangeDetector for StaticDetector {
        fn changed_since(&self, _since: DateTime<Utc>) -> Vec<PathBuf> {
            self.changed.clone()
        }

        fn poll_interval(&self) -> Duration {
            Duration::from_millis(1)
        }
    }

    fn spec() -> DependencySpec {
        DependencySpec::new()
            .name("generic dependency")
            .command("echo success")
            .satisfied_pattern(Regex::new("success").unwrap())
    }

    #[test]
    fn missing_command_is_a_configuration_error() {
        let mut check = DependencySpec::new()
            .satisfied_pattern(Regex::new("success").unwrap())
            .build();
        check.attach_host(Arc::new(StaticDetector::changed()));

        let err = check.ensure_satisfied().unwrap_err();
        assert!(matches!(err, RungateError::MissingCommand { .. }));
    }

    #[test]
    fn missing_pattern_is_a_configuration_error() {
        let mut check = DependencySpec::new().command("echo success").build();
        check.attach_host(Arc::new(StaticDetector::changed()));

        let err = check.ensure_satisfied().unwrap_err();
        assert!(matches!(err, RungateError::MissingPattern { .. }));
    }

    #[test]
    fn missing_host_is_a_configuration_error() {
        let mut check = spec().build();
        let err = check.ensure_satisfied().unwrap_err();
        assert!(matches!(err, RungateError::HostNotAttached { .. }));
    }

    #[test]
    fn configuration_errors_do_not_touch_the_host() {
        struct PanickingDetector;

        impl ChangeDetector for PanickingDetector {
            fn changed_since(&self, _since: DateTime<Utc>) -> Vec<PathBuf> {
                panic!("change detector polled during a configuration error");
            }

            fn poll_interval(&self) -> Duration {
                Duration::from_millis(1)
            }
        }

        let mut check = DependencySpec::new()
            .satisfied_pattern(Regex::new("success").unwrap())
            .build();
        check.attach_host(Arc::new(PanickingDetector));
        assert!(check.ensure_satisfied().is_err());
    }

    #[test]
    fn returns_immediately_when_nothing_changed() {
        let mut check = spec().build();
        check.attach_host(Arc::new(StaticDetector::unchanged()));

        let before = check.last_check_time();
        check.ensure_satisfied().unwrap();
        // The command never ran, so the check time is untouched.
        assert_eq!(check.last_check_time(), before);
    }

    #[test]
    fn satisfied_check_advances_last_check_time() {
        let mut check = spec().build();
        check.attach_host(Arc::new(StaticDetector::changed()));
        check.set_reporter(Reporter::with_sink(false, Box::new(std::io::sink())));

        check.ensure_satisfied().unwrap();
        assert!(check.last_check_time() > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn reset_rewinds_to_epoch() {
        let mut check = spec().build();
        check.attach_host(Arc::new(StaticDetector::changed()));
        check.set_reporter(Reporter::with_sink(false, Box::new(std::io::sink())));

        check.ensure_satisfied().unwrap();
        assert!(check.last_check_time() > DateTime::<Utc>::UNIX_EPOCH);

        check.reset();
        assert_eq!(check.last_check_time(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn run_hooks_delegate() {
        let mut check = spec().build();
        check.set_reporter(Reporter::with_sink(false, Box::new(std::io::sink())));

        check.on_init(Arc::new(StaticDetector::changed()));
        check.before_run().unwrap();
        assert!(check.last_check_time() > DateTime::<Utc>::UNIX_EPOCH);

        check.on_interrupt();
        assert_eq!(check.last_check_time(), DateTime::<Utc>::UNIX_EPOCH);
    }
}

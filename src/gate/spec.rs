//! Dependency configuration builder.

use regex::Regex;

use super::DependencyCheck;

/// Builder collecting the configuration of one dependency check.
///
/// Exactly four fields are recognized: `name`, `command`,
/// `satisfied_pattern`, and `errors_pattern`. Only the command and the
/// satisfied pattern are required, and their absence is caught when the
/// check first runs, not here. `build` is infallible so a spec can be
/// assembled incrementally and inspected in any state.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use rungate::gate::DependencySpec;
///
/// let check = DependencySpec::new()
///     .name("database schema")
///     .command("rake db:migrate:status")
///     .satisfied_pattern(Regex::new(r"^\s*up").unwrap())
///     .errors_pattern(Regex::new(r"down\s+(\S+)").unwrap())
///     .build();
/// assert_eq!(check.name(), Some("database schema"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DependencySpec {
    pub(crate) name: Option<String>,
    pub(crate) command: Option<String>,
    pub(crate) satisfied_pattern: Option<Regex>,
    pub(crate) errors_pattern: Option<Regex>,
}

impl DependencySpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable label, used only in messages.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Shell command whose output decides satisfaction.
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Pattern whose match against the command output signals success.
    pub fn satisfied_pattern(mut self, pattern: Regex) -> Self {
        self.satisfied_pattern = Some(pattern);
        self
    }

    /// Pattern extracting error detail lines from unsatisfied output.
    pub fn errors_pattern(mut self, pattern: Regex) -> Self {
        self.errors_pattern = Some(pattern);
        self
    }

    /// Build the check.
    pub fn build(self) -> DependencyCheck {
        DependencyCheck::from_spec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn build_carries_all_four_fields() {
        let check = DependencySpec::new()
            .name("solr")
            .command("curl -s localhost:8983/ping")
            .satisfied_pattern(Regex::new("OK").unwrap())
            .errors_pattern(Regex::new("error: (.*)").unwrap())
            .build();

        assert_eq!(check.name(), Some("solr"));
        assert_eq!(check.command(), Some("curl -s localhost:8983/ping"));
    }

    #[test]
    fn build_with_nothing_set_is_allowed() {
        let check = DependencySpec::new().build();
        assert_eq!(check.name(), None);
        assert_eq!(check.command(), None);
    }

    #[test]
    fn fresh_check_starts_at_epoch() {
        let check = DependencySpec::new().build();
        assert_eq!(check.last_check_time(), DateTime::<Utc>::UNIX_EPOCH);
    }
}

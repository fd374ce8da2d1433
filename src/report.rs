//! Report formatting for check results.
//!
//! Success and failure reports follow a fixed shape: a `"-> "` prefix, the
//! status message wrapped in green (satisfied) or red (not satisfied) when
//! colorization is on, and any extracted error lines indented by four
//! spaces. Colorization is carried explicitly by the [`Reporter`] rather
//! than read from a process-wide flag, so two checks in one process can
//! report differently.

use console::Style;
use std::io::{self, Write};

/// Render the banner emitted when a check cycle starts.
pub fn checking_line(name: &str) -> String {
    format!("\nChecking dependency: {name}")
}

/// Render the banner emitted when the wait loop observes a change.
pub fn rechecking_line(name: &str) -> String {
    format!("Rechecking dependency: {name}")
}

/// Render the satisfied report.
pub fn satisfied_line(colorize: bool) -> String {
    format!(
        "-> {}",
        styled("Dependency satisfied\n", &Style::new().green(), colorize)
    )
}

/// Render the unsatisfied report with its indented error lines.
///
/// Each error line is indented by four spaces. With no error lines the
/// report is the bare failure message.
pub fn not_satisfied_line(errors: &[String], colorize: bool) -> String {
    let block = errors
        .iter()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "-> {}",
        styled(
            &format!("Dependency not satisfied:\n{block}"),
            &Style::new().red(),
            colorize
        )
    )
}

fn styled(text: &str, style: &Style, colorize: bool) -> String {
    if colorize {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Writes check reports to the process's report stream.
///
/// The sink is injectable so embedding hosts (and tests) can capture
/// emissions; the default reports to stdout. Every message is terminated
/// with a newline, write failures are ignored since reporting is best-effort.
pub struct Reporter {
    colorize: bool,
    sink: Box<dyn Write + Send>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Create a reporter writing colorized output to stdout.
    pub fn new() -> Self {
        Self::with_sink(true, Box::new(io::stdout()))
    }

    /// Create a stdout reporter with an explicit colorization setting.
    pub fn with_colorize(colorize: bool) -> Self {
        Self::with_sink(colorize, Box::new(io::stdout()))
    }

    /// Create a reporter writing to an arbitrary sink.
    pub fn with_sink(colorize: bool, sink: Box<dyn Write + Send>) -> Self {
        Self { colorize, sink }
    }

    /// Whether reports are wrapped in ANSI color codes.
    pub fn colorize(&self) -> bool {
        self.colorize
    }

    /// Turn colorization on or off.
    pub fn set_colorize(&mut self, colorize: bool) {
        self.colorize = colorize;
    }

    /// Report that a check cycle is starting.
    pub fn checking(&mut self, name: &str) {
        self.emit(&checking_line(name));
    }

    /// Report that the check is about to rerun after a change.
    pub fn rechecking(&mut self, name: &str) {
        self.emit(&rechecking_line(name));
    }

    /// Report a satisfied dependency.
    pub fn satisfied(&mut self) {
        self.emit(&satisfied_line(self.colorize));
    }

    /// Report an unsatisfied dependency with its extracted error lines.
    pub fn not_satisfied(&mut self, errors: &[String]) {
        self.emit(&not_satisfied_line(errors, self.colorize));
    }

    fn emit(&mut self, message: &str) {
        let _ = writeln!(self.sink, "{message}");
        let _ = self.sink.flush();
    }
}

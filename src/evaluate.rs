//! Satisfaction evaluation over captured command output.
//!
//! A dependency is satisfied when its satisfied pattern matches anywhere in
//! the combined output of its check command. When it is not, the optional
//! errors pattern extracts the human-readable detail lines shown in the
//! failure report.

use regex::Regex;

/// Returns true if `pattern` matches anywhere in `output`.
pub fn is_satisfied(output: &str, pattern: &Regex) -> bool {
    pattern.is_match(output)
}

/// Extract error detail lines from unsatisfied command output.
///
/// Produces the ordered, non-overlapping matches of `pattern` within
/// `output`. If the pattern defines capture groups, each participating
/// group contributes one line; otherwise the whole match does. With no
/// pattern, or no matches, the result is empty.
pub fn extract_errors(output: &str, pattern: Option<&Regex>) -> Vec<String> {
    let Some(pattern) = pattern else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for caps in pattern.captures_iter(output) {
        if caps.len() > 1 {
            for group in caps.iter().skip(1).flatten() {
                lines.push(group.as_str().to_string());
            }
        } else {
            lines.push(caps[0].to_string());
        }
    }
    lines
}

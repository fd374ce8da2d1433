//! Check command execution with merged output.

use crate::error::{Result, RungateError};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Run a command line through the platform shell, with stderr redirected
/// into stdout, and return the combined text verbatim.
///
/// The command is wrapped in a subshell so the redirect covers every
/// command in the line, not just the last one. The exit status is not
/// consulted: whether a dependency is satisfied is decided purely by
/// matching the captured text. The one failure surfaced here is the shell
/// itself refusing to launch.
pub fn run_merged(command: &str) -> Result<String> {
    let output = Command::new(shell_executable())
        .arg(shell_flag())
        .arg(format!("({command}) 2>&1"))
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| RungateError::CommandSpawn {
            command: command.to_string(),
            source,
        })?;

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    tracing::debug!(
        command,
        bytes = text.len(),
        exit = ?output.status.code(),
        "check command finished"
    );
    Ok(text)
}

fn shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        PathBuf::from("sh")
    }
}

fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

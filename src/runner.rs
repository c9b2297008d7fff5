//! Shell command execution.
//!
//! Resolved Juicefile commands and git scaffolding steps are handed to an
//! [`Executor`] one at a time; each runs to completion before the next starts.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;
use std::process::{Command, Stdio};

/// Outcome of a finished shell command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs shell command strings.
pub trait Executor {
    /// Run `command` through the shell with `cwd` as working directory.
    ///
    /// Errors are reserved for failing to spawn; a non-zero exit is reported
    /// through [`CommandOutput::code`].
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput>;
}

/// Executor backed by `sh -c`.
#[derive(Debug, Clone, Copy)]
pub struct ShellExecutor {
    capture: bool,
}

impl ShellExecutor {
    /// Stream output straight to the terminal.
    pub fn streaming() -> Self {
        Self { capture: false }
    }

    /// Capture output so it can be reported on failure.
    pub fn capturing() -> Self {
        Self { capture: true }
    }
}

impl Executor for ShellExecutor {
    fn run(&self, command: &str, cwd: &Path) -> Result<CommandOutput> {
        log::debug!("Running `{}` in {}", command, cwd.display());

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(cwd);

        if self.capture {
            let output = cmd
                .output()
                .with_context(|| format!("Failed to execute: {command}"))?;
            Ok(CommandOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        } else {
            let status = cmd
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .with_context(|| format!("Failed to execute: {command}"))?;
            Ok(CommandOutput {
                code: status.code(),
                ..Default::default()
            })
        }
    }
}

/// Quote an argument for safe use in a POSIX shell command line.
///
/// Arguments made only of unambiguous characters are returned unchanged.
pub fn quote(arg: &str) -> Cow<'_, str> {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));

    if plain {
        Cow::Borrowed(arg)
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    }
}

// ============================================================================
// Tests
// ============================================================================

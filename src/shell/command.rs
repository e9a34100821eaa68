//! Process execution.
//!
//! Commands are given as argv lists and run without a shell, so package
//! names are never subject to shell interpretation.

use crate::error::{HelperError, Result};
use std::process::{Command, Stdio};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Run `argv[0]` with the remaining elements as arguments.
///
/// Blocks until the child exits. A non-zero exit is a failed
/// [`CommandResult`], not an error; only failing to start (or wait on)
/// the child is an error.
pub fn run(argv: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let Some((program, args)) = argv.split_first() else {
        return Err(HelperError::CommandSpawnFailed {
            command: String::new(),
            message: "empty command".to_string(),
        });
    };

    let shown = display_command(argv);
    tracing::debug!("Running: {}", shown);

    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::inherit());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| HelperError::CommandSpawnFailed {
        command: shown.clone(),
        message: e.to_string(),
    })?;

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        tracing::debug!("{} exited with {:?}", shown, output.status.code());
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

/// Run a command with output captured.
pub fn run_quiet(argv: &[String]) -> Result<CommandResult> {
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
    };
    run(argv, &options)
}

/// Run a command attached to the terminal, for anything that may prompt.
pub fn run_interactive(argv: &[String]) -> Result<CommandResult> {
    run(argv, &CommandOptions::default())
}

/// Render an argv list for messages and logs.
pub fn display_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                format!("'{}'", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

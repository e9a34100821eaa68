//! Output mode and writer.

use std::io::Write;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including package manager output.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show results, warnings and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows headers, informational messages and
    /// per-item success lines.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write command output if verbose mode.
    pub fn command_output(&self, output: &str) {
        if self.mode.shows_command_output() && !output.is_empty() {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            let _ = std::io::stdout().flush();
        }
    }
}

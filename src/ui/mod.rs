//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - Spinners and tables
//!
//! # Example
//!
//! ```
//! use tarball_helper::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Tracked: libfoo-dev");
//! assert!(ui.has_success("libfoo-dev"));
//! ```

pub mod mock;
pub mod output;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, HelperTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message. Hidden in quiet mode.
    fn message(&mut self, msg: &str);

    /// Display a success message. Hidden in quiet mode.
    fn success(&mut self, msg: &str);

    /// Display the final result of a command. Shown in every mode.
    fn summary(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Echo captured command output (verbose mode only).
    fn command_output(&mut self, output: &str);

    /// Print a rendered table.
    fn show_table(&mut self, table: &Table);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::HelperTheme;
use super::SpinnerHandle;

/// A progress spinner for a package manager call.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: HelperTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str, theme: HelperTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_finishes_with_themed_line() {
        let mut spinner = ProgressSpinner::new("Installing libfoo-dev", HelperTheme::plain());
        spinner.finish_success("Installed libfoo-dev");
        assert!(spinner.bar.is_finished());
        assert_eq!(spinner.bar.message(), "✓ Installed libfoo-dev");
    }

    #[test]
    fn spinner_finishes_with_error_line() {
        let mut spinner = ProgressSpinner::new("Removing libbar-dev", HelperTheme::plain());
        spinner.finish_error("Failed to remove libbar-dev");
        assert!(spinner.bar.is_finished());
        assert!(spinner.bar.message().contains("Failed to remove libbar-dev"));
    }
}

//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, HelperTheme, Output, OutputMode, ProgressSpinner, SpinnerHandle, Table,
    UserInterface,
};

/// Terminal UI implementation.
///
/// Results go to stdout; warnings, errors and spinners go to stderr so
/// piped output stays clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: HelperTheme,
    output: Output,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HelperTheme::new()
        } else {
            HelperTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            output: Output::new(mode),
        }
    }

    fn shows_status(&self) -> bool {
        self.output.mode().shows_status()
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.output.mode()
    }

    fn message(&mut self, msg: &str) {
        if self.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn summary(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn command_output(&mut self, output: &str) {
        self.output.command_output(output);
    }

    fn show_table(&mut self, table: &Table) {
        // Tables are the result of a command and show in every mode.
        writeln!(self.out, "{}", table.render()).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.output.mode().shows_spinners() && self.err.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(LineSpinner {
                theme: self.theme.clone(),
                show_success: self.shows_status(),
            })
        }
    }
}

/// Spinner stand-in for non-TTY or quiet output: prints only the final line.
struct LineSpinner {
    theme: HelperTheme,
    show_success: bool,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.show_success {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_keeps_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn quiet_ui_uses_line_spinner() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        let mut spinner = ui.start_spinner("Installing libfoo-dev");
        spinner.finish_success("Installed libfoo-dev");
    }
}

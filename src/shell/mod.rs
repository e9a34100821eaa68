//! Process execution and platform checks.

pub mod command;
pub mod platform;

pub use command::{
    display_command, run, run_interactive, run_quiet, CommandOptions, CommandResult,
};
pub use platform::is_elevated;

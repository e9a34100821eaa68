//! Track command implementation.
//!
//! The `tarball-helper track` command records a package that was installed
//! by hand so `cleanup` will remove it later.

use std::path::{Path, PathBuf};

use crate::cli::args::TrackArgs;
use crate::error::Result;
use crate::tracker::{JsonFileStore, Tracker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The track command implementation.
pub struct TrackCommand {
    args: TrackArgs,
    state_file: PathBuf,
}

impl TrackCommand {
    /// Create a new track command.
    pub fn new(args: TrackArgs, state_file: &Path) -> Self {
        Self {
            args,
            state_file: state_file.to_path_buf(),
        }
    }
}

impl Command for TrackCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut tracker = Tracker::open(Box::new(JsonFileStore::new(&self.state_file)))?;

        if tracker.track(&self.args.package)? {
            ui.summary(&format!("Tracked: {}", self.args.package));
        } else {
            ui.summary(&format!("{} is already tracked", self.args.package));
        }

        Ok(CommandResult::success())
    }
}

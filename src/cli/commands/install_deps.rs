//! Install-deps command implementation.
//!
//! The `tarball-helper install-deps` command installs every suggested
//! package for a source tree and tracks the ones that installed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::cli::args::InstallDepsArgs;
use crate::config::PackageManagerConfig;
use crate::error::Result;
use crate::tracker::{JsonFileStore, SystemPackageManager, Tracker};
use crate::ui::UserInterface;

use super::analyze::{mapping_table, scan_and_resolve};
use super::dispatcher::{Command, CommandResult};

/// The install-deps command implementation.
pub struct InstallDepsCommand {
    args: InstallDepsArgs,
    state_file: PathBuf,
    package_manager: PackageManagerConfig,
}

impl InstallDepsCommand {
    /// Create a new install-deps command.
    pub fn new(
        args: InstallDepsArgs,
        state_file: &Path,
        package_manager: PackageManagerConfig,
    ) -> Self {
        Self {
            args,
            state_file: state_file.to_path_buf(),
            package_manager,
        }
    }
}

impl Command for InstallDepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mapping = scan_and_resolve(&self.args.path, ui);
        if mapping.is_empty() {
            ui.message("No dependencies found");
            return Ok(CommandResult::success());
        }
        ui.show_table(&mapping_table(&mapping));

        // Different spellings of one library can guess the same package.
        let packages: Vec<String> = mapping
            .into_values()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut tracker = Tracker::open(Box::new(JsonFileStore::new(&self.state_file)))?;
        let manager = SystemPackageManager::from_config(&self.package_manager);

        ui.show_header(&format!("Installing {} package(s)", packages.len()));
        let report = tracker.install(&packages, &manager, ui)?;

        for outcome in report.succeeded() {
            ui.success(&format!("Tracked: {}", outcome.package));
        }

        let failed = report.failed().count();
        if failed > 0 {
            ui.warning(&format!(
                "{} of {} package(s) failed to install and were not tracked",
                failed,
                report.len()
            ));
        }
        ui.summary(&format!(
            "Installed {} of {} package(s)",
            report.succeeded().count(),
            report.len()
        ));

        Ok(CommandResult::success())
    }
}

//! Cleanup command implementation.
//!
//! The `tarball-helper cleanup` command removes every tracked package and
//! clears the tracking state.

use std::path::{Path, PathBuf};

use crate::config::PackageManagerConfig;
use crate::error::Result;
use crate::tracker::{JsonFileStore, SystemPackageManager, Tracker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The cleanup command implementation.
pub struct CleanupCommand {
    state_file: PathBuf,
    package_manager: PackageManagerConfig,
}

impl CleanupCommand {
    /// Create a new cleanup command.
    pub fn new(state_file: &Path, package_manager: PackageManagerConfig) -> Self {
        Self {
            state_file: state_file.to_path_buf(),
            package_manager,
        }
    }
}

impl Command for CleanupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut tracker = Tracker::open(Box::new(JsonFileStore::new(&self.state_file)))?;
        if tracker.packages().is_empty() {
            ui.message("No tracked packages");
            return Ok(CommandResult::success());
        }

        let manager = SystemPackageManager::from_config(&self.package_manager);
        let report = tracker.cleanup(&manager, ui)?;

        let failed: Vec<&str> = report.failed().map(|o| o.package.as_str()).collect();
        if !failed.is_empty() {
            ui.warning(&format!(
                "Could not remove: {} (no longer tracked)",
                failed.join(", ")
            ));
        }

        ui.summary("Cleanup complete.");
        Ok(CommandResult::success())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::SudoPolicy;
    use crate::tracker::TrackingStore;
    use crate::ui::{MockUI, SpinnerStatus};
    use tempfile::TempDir;

    fn manager(program: &str) -> PackageManagerConfig {
        PackageManagerConfig {
            install: vec![program.to_string()],
            remove: vec![program.to_string()],
            sudo: SudoPolicy::Never,
        }
    }

    fn seeded_state(temp: &TempDir, packages: &[&str]) -> PathBuf {
        let state = temp.path().join("manual_builds.json");
        let packages: Vec<String> = packages.iter().map(|s| s.to_string()).collect();
        JsonFileStore::new(&state).save(&packages).unwrap();
        state
    }

    #[test]
    fn cleanup_removes_and_clears() {
        let temp = TempDir::new().unwrap();
        let state = seeded_state(&temp, &["liba-dev", "libb-dev"]);
        let mut ui = MockUI::new();

        CleanupCommand::new(&state, manager("true"))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.spinner_results(),
            vec![
                SpinnerStatus::Success("Removed liba-dev".into()),
                SpinnerStatus::Success("Removed libb-dev".into()),
            ]
        );
        assert!(ui.has_summary("Cleanup complete."));
        assert!(JsonFileStore::new(&state).load().unwrap().is_empty());
    }

    #[test]
    fn cleanup_clears_even_when_removal_fails() {
        let temp = TempDir::new().unwrap();
        let state = seeded_state(&temp, &["liba-dev"]);
        let mut ui = MockUI::new();

        let result = CleanupCommand::new(&state, manager("false"))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Could not remove: liba-dev"));
        assert!(JsonFileStore::new(&state).load().unwrap().is_empty());
    }

    #[test]
    fn cleanup_with_nothing_tracked() {
        let temp = TempDir::new().unwrap();
        let state = temp.path().join("manual_builds.json");
        let mut ui = MockUI::new();

        CleanupCommand::new(&state, manager("false"))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("No tracked packages"));
        assert!(ui.spinners().is_empty());
        assert!(ui.summaries().is_empty());
        assert!(!state.exists());
    }
}

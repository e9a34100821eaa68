//! Manually installed package tracking.
//!
//! A [`Tracker`] owns the set of packages this tool has installed (or been
//! told about) so they can be removed later with [`Tracker::cleanup`].
//! Where the set is persisted is decided by the [`TrackingStore`] it is
//! opened with.
//!
//! # Example
//!
//! ```
//! use tarball_helper::tracker::{MemoryStore, Tracker};
//!
//! let mut tracker = Tracker::open(Box::new(MemoryStore::new())).unwrap();
//! assert!(tracker.track("libfoo-dev").unwrap());
//! assert!(!tracker.track("libfoo-dev").unwrap());
//! assert_eq!(tracker.packages(), ["libfoo-dev"]);
//! ```

pub mod package_manager;
pub mod report;
pub mod store;

pub use package_manager::{PackageManager, SystemPackageManager};
pub use report::{Action, ActionOutcome, BatchReport, OutcomeStatus};
pub use store::{JsonFileStore, MemoryStore, TrackingStore};

use crate::error::Result;
use crate::ui::UserInterface;

/// The tracked package set and its store.
pub struct Tracker {
    store: Box<dyn TrackingStore>,
    packages: Vec<String>,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("store", &self.store.location())
            .field("packages", &self.packages)
            .finish()
    }
}

impl Tracker {
    /// Load the tracked set from `store`.
    pub fn open(store: Box<dyn TrackingStore>) -> Result<Self> {
        let packages = store.load()?;
        tracing::debug!(
            "Loaded {} tracked package(s) from {}",
            packages.len(),
            store.location()
        );
        Ok(Self { store, packages })
    }

    /// Tracked packages, in the order they were tracked.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_tracked(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    /// Record `package`. Returns `false` without writing if it was already
    /// tracked.
    pub fn track(&mut self, package: &str) -> Result<bool> {
        if self.is_tracked(package) {
            tracing::debug!("{} is already tracked", package);
            return Ok(false);
        }

        self.packages.push(package.to_string());
        self.store.save(&self.packages)?;
        tracing::debug!("Tracking {}", package);
        Ok(true)
    }

    /// Install each package in turn, tracking the ones that succeed.
    ///
    /// A failed install is reported in the batch and does not stop the
    /// remaining installs. Only persistence errors are returned.
    pub fn install(
        &mut self,
        packages: &[String],
        manager: &dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> Result<BatchReport> {
        if let Err(report) = prepare_batch(Action::Install, packages, manager, ui) {
            return Ok(report);
        }

        let mut report = BatchReport::default();
        for package in packages {
            let outcome = run_action(Action::Install, package, manager, ui);
            if outcome.is_success() {
                self.track(package)?;
            }
            report.push(outcome);
        }

        Ok(report)
    }

    /// Remove every tracked package, then clear and persist the empty set.
    ///
    /// The set is cleared whatever the removal outcomes were. It is kept
    /// when the batch could not start at all, since nothing was removed.
    /// An empty set is left alone without touching the store.
    pub fn cleanup(
        &mut self,
        manager: &dyn PackageManager,
        ui: &mut dyn UserInterface,
    ) -> Result<BatchReport> {
        if self.packages.is_empty() {
            return Ok(BatchReport::default());
        }
        if let Err(report) = prepare_batch(Action::Remove, &self.packages, manager, ui) {
            return Ok(report);
        }

        let mut report = BatchReport::default();
        for package in std::mem::take(&mut self.packages) {
            report.push(run_action(Action::Remove, &package, manager, ui));
        }

        self.store.save(&self.packages)?;
        tracing::debug!(
            "Cleared tracking state at {} ({} removal(s) failed)",
            self.store.location(),
            report.failed().count()
        );
        Ok(report)
    }
}

/// Let the manager prepare before any spinner starts. On failure every
/// package is reported as failed with the preparation error.
fn prepare_batch(
    action: Action,
    packages: &[String],
    manager: &dyn PackageManager,
    ui: &mut dyn UserInterface,
) -> std::result::Result<(), BatchReport> {
    if packages.is_empty() {
        return Ok(());
    }

    manager.prepare().map_err(|detail| {
        ui.error(&detail);
        let mut report = BatchReport::default();
        for package in packages {
            report.push(ActionOutcome::failed(package, action, None, &detail));
        }
        report
    })
}

fn run_action(
    action: Action,
    package: &str,
    manager: &dyn PackageManager,
    ui: &mut dyn UserInterface,
) -> ActionOutcome {
    let mut spinner = ui.start_spinner(&format!("{} {}...", action.progressive(), package));

    let outcome = match action {
        Action::Install => manager.install(package),
        Action::Remove => manager.remove(package),
    };

    if outcome.is_success() {
        spinner.finish_success(&outcome.summary());
    } else {
        spinner.finish_error(&outcome.summary());
    }

    if let Some(output) = manager.last_output() {
        ui.command_output(&output);
    }

    outcome
}

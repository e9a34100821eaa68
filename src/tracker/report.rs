//! Per-package outcomes of install and remove batches.

use std::fmt;

/// A package manager action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Remove,
}

impl Action {
    /// Present participle for progress lines ("Installing").
    pub fn progressive(&self) -> &'static str {
        match self {
            Self::Install => "Installing",
            Self::Remove => "Removing",
        }
    }

    /// Past tense for result lines ("Installed").
    pub fn past(&self) -> &'static str {
        match self {
            Self::Install => "Installed",
            Self::Remove => "Removed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install => f.write_str("install"),
            Self::Remove => f.write_str("remove"),
        }
    }
}

/// Whether an action worked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Succeeded,
    Failed {
        /// Exit code, if the process ran and exited normally.
        exit_code: Option<i32>,
        /// Trimmed stderr, or why the process could not start.
        detail: String,
    },
}

/// Result of one package manager action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub package: String,
    pub action: Action,
    pub status: OutcomeStatus,
}

impl ActionOutcome {
    /// A successful action.
    pub fn succeeded(package: &str, action: Action) -> Self {
        Self {
            package: package.to_string(),
            action,
            status: OutcomeStatus::Succeeded,
        }
    }

    /// A failed action.
    pub fn failed(package: &str, action: Action, exit_code: Option<i32>, detail: &str) -> Self {
        Self {
            package: package.to_string(),
            action,
            status: OutcomeStatus::Failed {
                exit_code,
                detail: detail.trim().to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Succeeded)
    }

    /// One-line result, e.g. `Installed libfoo-dev` or
    /// `Failed to install libfoo-dev (exit code 100)`.
    pub fn summary(&self) -> String {
        match &self.status {
            OutcomeStatus::Succeeded => format!("{} {}", self.action.past(), self.package),
            OutcomeStatus::Failed {
                exit_code: Some(code),
                ..
            } => format!(
                "Failed to {} {} (exit code {})",
                self.action, self.package, code
            ),
            OutcomeStatus::Failed {
                exit_code: None,
                detail,
            } if !detail.is_empty() => {
                format!("Failed to {} {}: {}", self.action, self.package, detail)
            }
            OutcomeStatus::Failed { .. } => {
                format!("Failed to {} {}", self.action, self.package)
            }
        }
    }
}

/// Outcomes of a batch, in the order the actions ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<ActionOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: ActionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ActionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// True when no action failed (including an empty batch).
    pub fn is_clean(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

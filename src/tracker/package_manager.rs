//! System package manager invocation.

use crate::config::PackageManagerConfig;
use crate::shell::{self, CommandResult};

use super::report::{Action, ActionOutcome};

/// Installs and removes packages. Failures are reported, never raised.
pub trait PackageManager {
    /// Called once before a batch, while no spinner is running, for
    /// anything that needs the terminal (such as a password prompt).
    /// An error fails the whole batch without running any action.
    fn prepare(&self) -> std::result::Result<(), String> {
        Ok(())
    }

    /// Install `package`.
    fn install(&self, package: &str) -> ActionOutcome;

    /// Remove `package`.
    fn remove(&self, package: &str) -> ActionOutcome;

    /// Output captured from the last action, for verbose echoing.
    fn last_output(&self) -> Option<String> {
        None
    }
}

/// A package manager driven by configured argv templates.
#[derive(Debug)]
pub struct SystemPackageManager {
    install: Vec<String>,
    remove: Vec<String>,
    use_sudo: bool,
    last_output: std::cell::RefCell<Option<String>>,
}

impl SystemPackageManager {
    /// Build from config, deciding on sudo from the current privileges.
    pub fn from_config(config: &PackageManagerConfig) -> Self {
        Self::new(
            config.install.clone(),
            config.remove.clone(),
            config.sudo.use_sudo(shell::is_elevated()),
        )
    }

    /// Build from explicit command templates.
    pub fn new(install: Vec<String>, remove: Vec<String>, use_sudo: bool) -> Self {
        Self {
            install,
            remove,
            use_sudo,
            last_output: std::cell::RefCell::new(None),
        }
    }

    /// Whether actions run through `sudo`.
    pub fn uses_sudo(&self) -> bool {
        self.use_sudo
    }

    /// Full argv for `action` on `package`.
    pub fn command_for(&self, action: Action, package: &str) -> Vec<String> {
        let template = match action {
            Action::Install => &self.install,
            Action::Remove => &self.remove,
        };

        let mut argv = Vec::with_capacity(template.len() + 2);
        if self.use_sudo {
            argv.push("sudo".to_string());
        }
        argv.extend(template.iter().cloned());
        argv.push(package.to_string());
        argv
    }

    fn perform(&self, action: Action, package: &str) -> ActionOutcome {
        let argv = self.command_for(action, package);
        tracing::debug!("{} {}", action.progressive(), package);

        match shell::run_quiet(&argv) {
            Ok(result) => {
                self.last_output.replace(Some(combined_output(&result)));
                if result.success {
                    ActionOutcome::succeeded(package, action)
                } else {
                    tracing::debug!(
                        "{} exited with {:?}",
                        shell::display_command(&argv),
                        result.exit_code
                    );
                    ActionOutcome::failed(package, action, result.exit_code, &result.stderr)
                }
            }
            Err(e) => {
                self.last_output.replace(None);
                tracing::debug!("{}", e);
                ActionOutcome::failed(package, action, None, &e.to_string())
            }
        }
    }
}

impl PackageManager for SystemPackageManager {
    /// Authenticate `sudo` up front so later prompts never race a spinner.
    fn prepare(&self) -> std::result::Result<(), String> {
        if !self.use_sudo {
            return Ok(());
        }

        let argv = ["sudo".to_string(), "-v".to_string()];
        match shell::run_interactive(&argv) {
            Ok(result) if result.success => Ok(()),
            Ok(result) => Err(match result.exit_code {
                Some(code) => format!("sudo authentication failed (exit code {})", code),
                None => "sudo authentication failed".to_string(),
            }),
            Err(e) => Err(e.to_string()),
        }
    }

    fn install(&self, package: &str) -> ActionOutcome {
        self.perform(Action::Install, package)
    }

    fn remove(&self, package: &str) -> ActionOutcome {
        self.perform(Action::Remove, package)
    }

    fn last_output(&self) -> Option<String> {
        self.last_output.borrow().clone()
    }
}

fn combined_output(result: &CommandResult) -> String {
    let mut out = result.stdout.clone();
    if !result.stderr.is_empty() {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&result.stderr);
    }
    out
}

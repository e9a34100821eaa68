//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, resolve_state_file, HelperConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: HelperConfig,
    state_file: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher from already resolved settings.
    pub fn new(config: HelperConfig, state_file: PathBuf) -> Self {
        Self { config, state_file }
    }

    /// Load config and resolve the state file from the global flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        let state_file = resolve_state_file(cli.state_file.as_deref(), &config);
        tracing::debug!("Using tracking state at {}", state_file.display());
        Ok(Self::new(config, state_file))
    }

    /// The tracking state file.
    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Analyze(args) => {
                let cmd = super::analyze::AnalyzeCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::InstallDeps(args) => {
                let cmd = super::install_deps::InstallDepsCommand::new(
                    args.clone(),
                    &self.state_file,
                    self.config.package_manager.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Track(args) => {
                let cmd = super::track::TrackCommand::new(args.clone(), &self.state_file);
                cmd.execute(ui)
            }
            Commands::Cleanup => {
                let cmd = super::cleanup::CleanupCommand::new(
                    &self.state_file,
                    self.config.package_manager.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

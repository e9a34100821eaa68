//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Find build dependencies of source tarballs and track manually installed packages.
#[derive(Debug, Parser)]
#[command(name = "tarball-helper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.cortex/tarball_helper.yml)
    #[arg(short, long, global = true, env = "TARBALL_HELPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the tracking state file (overrides ~/.cortex/manual_builds.json)
    #[arg(long, global = true, env = "TARBALL_HELPER_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Show verbose output, including package manager output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a source tree and suggest packages for its dependencies
    Analyze(AnalyzeArgs),

    /// Install the suggested packages and track the ones that succeed
    InstallDeps(InstallDepsArgs),

    /// Record a manually installed package
    Track(TrackArgs),

    /// Remove every tracked package and clear the tracking state
    Cleanup,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AnalyzeArgs {
    /// Source directory to scan
    pub path: PathBuf,
}

/// Arguments for the `install-deps` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallDepsArgs {
    /// Source directory to scan
    pub path: PathBuf,
}

/// Arguments for the `track` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TrackArgs {
    /// Package to record
    pub package: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze() {
        let cli = Cli::try_parse_from(["tarball-helper", "analyze", "./src"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => assert_eq!(args.path, PathBuf::from("./src")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_install_deps_with_kebab_name() {
        let cli = Cli::try_parse_from(["tarball-helper", "install-deps", "/tmp/src"]).unwrap();
        assert!(matches!(cli.command, Commands::InstallDeps(_)));
    }

    #[test]
    fn parses_track_and_cleanup() {
        let cli = Cli::try_parse_from(["tarball-helper", "track", "libfoo-dev"]).unwrap();
        match cli.command {
            Commands::Track(args) => assert_eq!(args.package, "libfoo-dev"),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["tarball-helper", "cleanup"]).unwrap();
        assert!(matches!(cli.command, Commands::Cleanup));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tarball-helper",
            "cleanup",
            "--state-file",
            "/tmp/state.json",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.state_file, Some(PathBuf::from("/tmp/state.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["tarball-helper"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["tarball-helper", "-q", "-v", "cleanup"]).is_err());
    }

    #[test]
    fn track_requires_package() {
        assert!(Cli::try_parse_from(["tarball-helper", "track"]).is_err());
    }
}

//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! config once and hands each command the settings it needs.

pub mod analyze;
pub mod cleanup;
pub mod completions;
pub mod dispatcher;
pub mod install_deps;
pub mod track;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

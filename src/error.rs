//! Error types for tarball-helper operations.
//!
//! This module defines [`HelperError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Scan problems and package manager failures never become errors; they
//!   are recorded in scan and batch reports instead
//! - Configuration and state persistence problems are `HelperError`s and
//!   reach the top level
//! - Use `anyhow::Error` (via `HelperError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tarball-helper operations.
#[derive(Debug, Error)]
pub enum HelperError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The tracking state file exists but cannot be understood.
    #[error("Tracking state at {path} is corrupt: {message}")]
    StateCorrupt { path: PathBuf, message: String },

    /// A child process could not be started or waited on.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tarball-helper operations.
pub type Result<T> = std::result::Result<T, HelperError>;

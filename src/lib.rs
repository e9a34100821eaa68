//! tarball-helper - find and manage the `-dev` packages a source tree needs.
//!
//! The helper scans build descriptors (CMake, Meson, Autoconf, Make and
//! setuptools files) for library dependency names, guesses the matching
//! development package for each, and can install those packages while
//! keeping a record so they can be removed again later.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading and validation
//! - [`error`] - Error types and result aliases
//! - [`resolver`] - Dependency name to package name mapping
//! - [`scanner`] - Build descriptor discovery and dependency extraction
//! - [`shell`] - Process execution
//! - [`tracker`] - Tracked package state, install and cleanup
//! - [`ui`] - Terminal output, spinners and tables
//!
//! # Example
//!
//! ```
//! use tarball_helper::resolver::suggest_packages;
//!
//! let mapping = suggest_packages(["OpenSSL", "zlib"]);
//! assert_eq!(mapping["OpenSSL"], "libopenssl-dev");
//! assert_eq!(mapping["zlib"], "libzlib-dev");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;
pub mod scanner;
pub mod shell;
pub mod tracker;
pub mod ui;

pub use error::{HelperError, Result};

//! Configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and validation in [`loader`]
//!
//! # Configuration File Location
//!
//! The config file is read from `--config` / `TARBALL_HELPER_CONFIG` when
//! given, and otherwise from `~/.cortex/tarball_helper.yml` if it exists.
//! Every field is optional.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use tarball_helper::config::{parse_config, validate, SudoPolicy};
//!
//! let config = parse_config("package_manager:\n  sudo: never\n", Path::new("inline")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.package_manager.sudo, SudoPolicy::Never);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, default_state_file, expand_home, load_config, load_config_file,
    parse_config, resolve_state_file, validate,
};
pub use schema::{HelperConfig, PackageManagerConfig, SudoPolicy};

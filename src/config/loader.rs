//! Configuration file discovery and loading.

use crate::config::schema::HelperConfig;
use crate::error::{HelperError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding config and state.
pub const HELPER_DIR: &str = ".cortex";

/// Default config file name inside [`HELPER_DIR`].
pub const CONFIG_FILE: &str = "tarball_helper.yml";

/// Default tracking state file name inside [`HELPER_DIR`].
pub const STATE_FILE: &str = "manual_builds.json";

fn helper_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(HELPER_DIR)
}

/// `~/.cortex/tarball_helper.yml`
pub fn default_config_path() -> PathBuf {
    helper_dir().join(CONFIG_FILE)
}

/// `~/.cortex/manual_builds.json`
pub fn default_state_file() -> PathBuf {
    helper_dir().join(STATE_FILE)
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// if present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<HelperConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(HelperError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            load_config_file(path)
        }
        None => {
            let path = default_config_path();
            if path.exists() {
                load_config_file(&path)
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(HelperConfig::default())
            }
        }
    }
}

/// Load, parse and validate a single config file.
pub fn load_config_file(path: &Path) -> Result<HelperConfig> {
    tracing::debug!("Loading config from {}", path.display());
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse YAML config content. `path` is only used for error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<HelperConfig> {
    if content.trim().is_empty() {
        return Ok(HelperConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| HelperError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check that package manager commands are usable.
pub fn validate(config: &HelperConfig) -> Result<()> {
    let pm = &config.package_manager;
    for (name, argv) in [("install", &pm.install), ("remove", &pm.remove)] {
        match argv.first() {
            None => {
                return Err(HelperError::ConfigValidationError {
                    message: format!("package_manager.{} must not be empty", name),
                })
            }
            Some(program) if program.trim().is_empty() => {
                return Err(HelperError::ConfigValidationError {
                    message: format!("package_manager.{} has a blank program name", name),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Pick the tracking file: explicit override, then config, then default.
pub fn resolve_state_file(override_path: Option<&Path>, config: &HelperConfig) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.state_file.clone())
        .map(|p| expand_home(&p))
        .unwrap_or_else(default_state_file)
}

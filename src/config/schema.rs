//! Configuration schema.
//!
//! ```yaml
//! state_file: ~/.cortex/manual_builds.json
//! package_manager:
//!   install: [apt-get, install, -y]
//!   remove: [apt-get, remove, -y]
//!   sudo: auto
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelperConfig {
    /// Where tracked packages are recorded. `~/` expands to the home directory.
    pub state_file: Option<PathBuf>,

    /// How packages are installed and removed.
    pub package_manager: PackageManagerConfig,
}

/// Package manager invocation.
///
/// The package name is appended to `install` or `remove` as the final
/// argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManagerConfig {
    /// Install command argv.
    pub install: Vec<String>,

    /// Remove command argv.
    pub remove: Vec<String>,

    /// When to prefix commands with `sudo`.
    pub sudo: SudoPolicy,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            install: vec!["apt-get".into(), "install".into(), "-y".into()],
            remove: vec!["apt-get".into(), "remove".into(), "-y".into()],
            sudo: SudoPolicy::Auto,
        }
    }
}

/// When to run package manager commands through `sudo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SudoPolicy {
    /// Use sudo unless already running as root.
    #[default]
    Auto,
    /// Always use sudo.
    Always,
    /// Never use sudo.
    Never,
}

impl SudoPolicy {
    /// Whether sudo should be used given the current privilege level.
    pub fn use_sudo(&self, elevated: bool) -> bool {
        match self {
            Self::Auto => !elevated,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_apt() {
        let config = HelperConfig::default();
        assert!(config.state_file.is_none());
        assert_eq!(config.package_manager.install, ["apt-get", "install", "-y"]);
        assert_eq!(config.package_manager.remove, ["apt-get", "remove", "-y"]);
        assert_eq!(config.package_manager.sudo, SudoPolicy::Auto);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: HelperConfig = serde_yaml::from_str("package_manager:\n  sudo: never\n").unwrap();
        assert_eq!(config.package_manager.sudo, SudoPolicy::Never);
        assert_eq!(config.package_manager.install, ["apt-get", "install", "-y"]);
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r#"
state_file: /tmp/state.json
package_manager:
  install: [dnf, install, -y]
  remove: [dnf, remove, -y]
  sudo: always
"#;
        let config: HelperConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.state_file, Some(PathBuf::from("/tmp/state.json")));
        assert_eq!(config.package_manager.install, ["dnf", "install", "-y"]);
        assert_eq!(config.package_manager.sudo, SudoPolicy::Always);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<HelperConfig, _> = serde_yaml::from_str("statefile: /tmp/x\n");
        assert!(result.is_err());
    }

    #[test]
    fn sudo_policy_decisions() {
        assert!(SudoPolicy::Auto.use_sudo(false));
        assert!(!SudoPolicy::Auto.use_sudo(true));
        assert!(SudoPolicy::Always.use_sudo(true));
        assert!(!SudoPolicy::Never.use_sudo(false));
    }
}

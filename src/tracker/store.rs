//! Tracking state persistence.
//!
//! The tracker never knows where its state lives; it is handed a
//! [`TrackingStore`]. [`JsonFileStore`] is the on-disk implementation and
//! [`MemoryStore`] keeps everything in memory.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HelperError, Result};

/// Loads and saves the tracked package list.
pub trait TrackingStore {
    /// Load the tracked packages. An absent store is empty.
    fn load(&self) -> Result<Vec<String>>;

    /// Replace the stored packages with `packages`.
    fn save(&self, packages: &[String]) -> Result<()>;

    /// Where the state lives, for messages.
    fn location(&self) -> String;
}

/// On-disk shape of the state file.
#[derive(Debug, Serialize, Deserialize)]
struct TrackedFile {
    #[serde(default)]
    packages: Vec<String>,
}

/// JSON state file, `{"packages": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. Nothing is read until [`load`].
    ///
    /// [`load`]: TrackingStore::load
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The state file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, message: impl Into<String>) -> HelperError {
        HelperError::StateCorrupt {
            path: self.path.clone(),
            message: message.into(),
        }
    }
}

impl TrackingStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            tracing::debug!("No tracking state at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        if !value.is_object() {
            tracing::warn!(
                "Tracking state at {} is not a JSON object; treating it as empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let file: TrackedFile = serde_json::from_value(value)
            .map_err(|e| self.corrupt(format!("invalid \"packages\" field: {}", e)))?;

        Ok(dedup_preserving_order(file.packages))
    }

    /// Writes atomically: temp file first, then rename over the target.
    fn save(&self, packages: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = TrackedFile {
            packages: packages.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(anyhow::Error::from)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Saved {} tracked package(s) to {}",
            packages.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    packages: RefCell<Vec<String>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `packages`.
    pub fn with_packages(packages: &[&str]) -> Self {
        Self {
            packages: RefCell::new(packages.iter().map(|s| s.to_string()).collect()),
            saves: RefCell::new(0),
        }
    }

    /// The currently stored packages.
    pub fn packages(&self) -> Vec<String> {
        self.packages.borrow().clone()
    }

    /// How many times [`TrackingStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl TrackingStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>> {
        Ok(dedup_preserving_order(self.packages.borrow().clone()))
    }

    fn save(&self, packages: &[String]) -> Result<()> {
        *self.packages.borrow_mut() = packages.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Shared stores can be handed to a tracker while the test keeps a handle.
impl<T: TrackingStore + ?Sized> TrackingStore for std::rc::Rc<T> {
    fn load(&self) -> Result<Vec<String>> {
        (**self).load()
    }

    fn save(&self, packages: &[String]) -> Result<()> {
        (**self).save(packages)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

fn dedup_preserving_order(packages: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    packages
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("manual_builds.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".cortex").join("manual_builds.json");
        let store = JsonFileStore::new(&path);

        store
            .save(&["libfoo-dev".to_string(), "libbar-dev".to_string()])
            .unwrap();

        assert!(path.exists());
        assert_eq!(store.load().unwrap(), ["libfoo-dev", "libbar-dev"]);
    }

    #[test]
    fn save_writes_packages_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        let store = JsonFileStore::new(&path);

        store.save(&["libfoo-dev".to_string()]).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "packages": ["libfoo-dev"] }));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn save_empty_writes_empty_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        let store = JsonFileStore::new(&path);

        store.save(&[]).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["packages"], serde_json::json!([]));
    }

    #[test]
    fn load_object_without_packages_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"version": 2}"#).unwrap();

        assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn load_non_object_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, r#"["libfoo-dev"]"#).unwrap();

        assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn load_malformed_json_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"packages": ["libfoo-dev""#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, HelperError::StateCorrupt { .. }));
        // The corrupt file is left as it was.
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"packages": ["libfoo-dev""#
        );
    }

    #[test]
    fn load_wrong_packages_type_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"packages": "libfoo-dev"}"#).unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("packages"));
    }

    #[test]
    fn load_collapses_duplicates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"packages": ["a", "b", "a"]}"#).unwrap();

        assert_eq!(JsonFileStore::new(&path).load().unwrap(), ["a", "b"]);
    }

    #[test]
    fn memory_store_counts_saves() {
        let store = MemoryStore::with_packages(&["a"]);
        assert_eq!(store.load().unwrap(), ["a"]);

        store.save(&["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(store.packages(), ["a", "b"]);
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.location(), "memory");
    }
}

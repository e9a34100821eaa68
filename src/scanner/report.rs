//! Scan results.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use super::descriptor::BuildDescriptor;

/// Why a file contributed nothing to a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be read.
    Unreadable(String),
    /// The directory walker could not read this entry.
    WalkError(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable(msg) => write!(f, "unreadable: {}", msg),
            Self::WalkError(msg) => write!(f, "walk error: {}", msg),
        }
    }
}

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was read and its rule applied (possibly matching nothing).
    Parsed { names: BTreeSet<String> },
    /// The file was not parsed.
    Skipped { reason: SkipReason },
}

/// Result for a single visited build descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScan {
    /// Path of the file (or of the entry that failed to walk).
    pub path: PathBuf,
    /// The descriptor, if the entry was identified as one.
    pub descriptor: Option<BuildDescriptor>,
    /// What happened.
    pub outcome: FileOutcome,
}

impl FileScan {
    /// Names this file contributed.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names = match &self.outcome {
            FileOutcome::Parsed { names } => Some(names),
            FileOutcome::Skipped { .. } => None,
        };
        names.into_iter().flatten().map(String::as_str)
    }

    /// The skip reason, if the file was skipped.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match &self.outcome {
            FileOutcome::Skipped { reason } => Some(reason),
            FileOutcome::Parsed { .. } => None,
        }
    }
}

/// Everything a scan of one directory tree found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Whether the scanned root existed.
    pub root_exists: bool,
    /// Per-file results in walk order.
    pub files: Vec<FileScan>,
}

impl ScanReport {
    /// Union of every name found, without duplicates.
    pub fn dependencies(&self) -> BTreeSet<String> {
        self.files
            .iter()
            .flat_map(FileScan::names)
            .map(str::to_string)
            .collect()
    }

    /// Files that were parsed.
    pub fn parsed(&self) -> impl Iterator<Item = &FileScan> {
        self.files.iter().filter(|f| f.skip_reason().is_none())
    }

    /// Files that were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &FileScan> {
        self.files.iter().filter(|f| f.skip_reason().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(path: &str, names: &[&str]) -> FileScan {
        FileScan {
            path: PathBuf::from(path),
            descriptor: BuildDescriptor::from_file_name(path),
            outcome: FileOutcome::Parsed {
                names: names.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn dependencies_are_a_union() {
        let report = ScanReport {
            root_exists: true,
            files: vec![
                parsed("CMakeLists.txt", &["ZLIB", "OpenSSL"]),
                parsed("Makefile", &["ZLIB", "m"]),
            ],
        };

        let deps: Vec<_> = report.dependencies().into_iter().collect();
        assert_eq!(deps, ["OpenSSL", "ZLIB", "m"]);
    }

    #[test]
    fn skipped_files_contribute_nothing() {
        let report = ScanReport {
            root_exists: true,
            files: vec![
                parsed("meson.build", &["zlib"]),
                FileScan {
                    path: PathBuf::from("CMakeLists.txt"),
                    descriptor: Some(BuildDescriptor::CMake),
                    outcome: FileOutcome::Skipped {
                        reason: SkipReason::Unreadable("permission denied".into()),
                    },
                },
            ],
        };

        assert_eq!(report.dependencies().len(), 1);
        assert_eq!(report.parsed().count(), 1);
        let skipped: Vec<_> = report.skipped().collect();
        assert_eq!(skipped.len(), 1);
        assert_eq!(
            skipped[0].skip_reason(),
            Some(&SkipReason::Unreadable("permission denied".into()))
        );
    }

    #[test]
    fn skip_reason_display() {
        let reason = SkipReason::WalkError("loop detected".into());
        assert_eq!(reason.to_string(), "walk error: loop detected");
    }
}

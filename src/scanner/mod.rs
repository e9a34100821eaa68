//! Build descriptor discovery and dependency extraction.
//!
//! [`scan`] walks a source tree, picks out files recognized by exact name
//! (see [`BuildDescriptor`]) and applies each one's extraction rule.
//! Problems with individual files never fail the scan; they are recorded
//! as [`SkipReason`]s on the per-file [`FileScan`] results.
//!
//! # Example
//!
//! ```
//! use std::fs;
//! use tarball_helper::scanner::scan;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("CMakeLists.txt"),
//!     "find_package(OpenSSL)\nfind_package(ZLIB)",
//! )
//! .unwrap();
//!
//! let deps: Vec<_> = scan(temp.path()).dependencies().into_iter().collect();
//! assert_eq!(deps, ["OpenSSL", "ZLIB"]);
//! ```

pub mod descriptor;
pub mod report;
pub mod rules;

pub use descriptor::BuildDescriptor;
pub use report::{FileOutcome, FileScan, ScanReport, SkipReason};

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Scan every build descriptor under `root`.
///
/// A root that is not an existing directory yields an empty report with
/// `root_exists` unset.
pub fn scan(root: &Path) -> ScanReport {
    if !root.is_dir() {
        tracing::debug!("Scan root {} is not a directory", root.display());
        return ScanReport::default();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                tracing::debug!("Skipping {}: {}", path.display(), e);
                files.push(FileScan {
                    path,
                    descriptor: None,
                    outcome: FileOutcome::Skipped {
                        reason: SkipReason::WalkError(e.to_string()),
                    },
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(descriptor) = entry
            .file_name()
            .to_str()
            .and_then(BuildDescriptor::from_file_name)
        else {
            continue;
        };

        files.push(scan_file(entry.path(), descriptor));
    }

    ScanReport {
        root_exists: true,
        files,
    }
}

/// Read one descriptor and apply its rule.
pub fn scan_file(path: &Path, descriptor: BuildDescriptor) -> FileScan {
    let outcome = match fs::read(path) {
        Ok(bytes) => {
            let names = rules::extract(descriptor, &decode_ignoring_invalid(&bytes));
            tracing::debug!(
                "Scanned {} ({}): {} name(s)",
                path.display(),
                descriptor.label(),
                names.len()
            );
            FileOutcome::Parsed { names }
        }
        Err(e) => {
            tracing::debug!("Skipping {}: {}", path.display(), e);
            FileOutcome::Skipped {
                reason: SkipReason::Unreadable(e.to_string()),
            }
        }
    };

    FileScan {
        path: path.to_path_buf(),
        descriptor: Some(descriptor),
        outcome,
    }
}

/// Decode UTF-8, dropping invalid byte sequences.
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scan_cmake_project() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("CMakeLists.txt"),
            "\n    find_package(OpenSSL)\n    find_package(ZLIB)\n    ",
        )
        .unwrap();

        let report = scan(temp.path());
        assert!(report.root_exists);
        assert_eq!(report.dependencies(), set(&["OpenSSL", "ZLIB"]));
    }

    #[test]
    fn scan_meson_project() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("meson.build"),
            "dependency('libcurl')\ndependency('zlib')",
        )
        .unwrap();

        assert_eq!(scan(temp.path()).dependencies(), set(&["libcurl", "zlib"]));
    }

    #[test]
    fn scan_recurses_and_merges() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("src").join("lib");
        fs::create_dir_all(&sub).unwrap();
        fs::write(temp.path().join("CMakeLists.txt"), "find_package(ZLIB)").unwrap();
        fs::write(sub.join("Makefile"), "LIBS = -lz -lm").unwrap();
        fs::write(sub.join("configure.ac"), "AC_CHECK_LIB([ZLIB], [inflate])").unwrap();

        let report = scan(temp.path());
        assert_eq!(report.files.len(), 3);
        assert_eq!(report.dependencies(), set(&["ZLIB", "m", "z"]));
    }

    #[test]
    fn scan_ignores_unrecognized_names() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("makefile"), "-lfoo").unwrap();
        fs::write(temp.path().join("CMakeLists.txt.bak"), "find_package(Foo)").unwrap();
        fs::write(temp.path().join("README.md"), "find_package(Bar)").unwrap();

        let report = scan(temp.path());
        assert!(report.files.is_empty());
        assert!(report.dependencies().is_empty());
    }

    #[test]
    fn recognized_file_without_matches_is_parsed_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("meson.build"), "project('demo', 'c')").unwrap();

        let report = scan(temp.path());
        assert_eq!(report.files.len(), 1);
        assert_eq!(
            report.files[0].outcome,
            FileOutcome::Parsed {
                names: BTreeSet::new()
            }
        );
    }

    #[test]
    fn scan_tolerates_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let mut bytes = b"find_package(Open".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"SSL)\nfind_package(ZLIB)");
        fs::write(temp.path().join("CMakeLists.txt"), bytes).unwrap();

        assert_eq!(
            scan(temp.path()).dependencies(),
            set(&["OpenSSL", "ZLIB"])
        );
    }

    #[test]
    fn scan_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let report = scan(&temp.path().join("does-not-exist"));
        assert!(!report.root_exists);
        assert!(report.files.is_empty());
        assert!(report.dependencies().is_empty());
    }

    #[test]
    fn scan_of_file_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("CMakeLists.txt");
        fs::write(&file, "find_package(ZLIB)\n").unwrap();

        let report = scan(&file);
        assert!(!report.root_exists);
        assert!(report.files.is_empty());
        assert!(report.dependencies().is_empty());
    }

    #[test]
    fn scan_file_reports_unreadable() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("CMakeLists.txt");

        let result = scan_file(&missing, BuildDescriptor::CMake);
        assert!(matches!(
            result.skip_reason(),
            Some(SkipReason::Unreadable(_))
        ));
        assert_eq!(result.names().count(), 0);
    }

    #[test]
    fn decode_drops_invalid_sequences() {
        assert_eq!(decode_ignoring_invalid(b"ab\xffcd"), "abcd");
        assert_eq!(decode_ignoring_invalid("héllo".as_bytes()), "héllo");
    }
}

//! Analyze command implementation.
//!
//! The `tarball-helper analyze` command scans a source tree and prints the
//! packages it would install.

use std::path::Path;

use crate::cli::args::AnalyzeArgs;
use crate::error::Result;
use crate::resolver::{suggest_packages, PackageMapping};
use crate::scanner;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The analyze command implementation.
pub struct AnalyzeCommand {
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    /// Create a new analyze command.
    pub fn new(args: AnalyzeArgs) -> Self {
        Self { args }
    }
}

impl Command for AnalyzeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mapping = scan_and_resolve(&self.args.path, ui);

        if mapping.is_empty() {
            ui.message("No dependencies found");
        }
        ui.show_table(&mapping_table(&mapping));

        Ok(CommandResult::success())
    }
}

/// Scan `root`, warn about anything that could not be read, and map the
/// dependency names found to package guesses.
pub(crate) fn scan_and_resolve(root: &Path, ui: &mut dyn UserInterface) -> PackageMapping {
    let report = scanner::scan(root);

    if !report.root_exists {
        if root.exists() {
            ui.warning(&format!("Not a directory: {}", root.display()));
        } else {
            ui.warning(&format!("Path does not exist: {}", root.display()));
        }
    }
    for file in report.skipped() {
        if let Some(reason) = file.skip_reason() {
            ui.warning(&format!("Skipped {}: {}", file.path.display(), reason));
        }
    }

    tracing::debug!(
        "Parsed {} build file(s) under {}",
        report.parsed().count(),
        root.display()
    );

    suggest_packages(report.dependencies())
}

/// Dependency to package table.
pub(crate) fn mapping_table(mapping: &PackageMapping) -> Table {
    let mut table =
        Table::new(vec!["Dependency", "Apt Package"]).with_title("Suggested apt packages");
    for (name, package) in mapping {
        table.add_row(vec![name.as_str(), package.as_str()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn analyze(path: PathBuf) -> MockUI {
        let mut ui = MockUI::new();
        let result = AnalyzeCommand::new(AnalyzeArgs { path })
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        ui
    }

    #[test]
    fn analyze_cmake_project() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("CMakeLists.txt"),
            "find_package(OpenSSL REQUIRED)\nfind_package(ZLIB)\n",
        )
        .unwrap();

        let ui = analyze(temp.path().to_path_buf());

        assert_eq!(ui.tables().len(), 1);
        let table = &ui.tables()[0];
        assert!(table.contains("Suggested apt packages"));
        assert!(table.contains("OpenSSL"));
        assert!(table.contains("libopenssl-dev"));
        assert!(table.contains("ZLIB"));
        assert!(table.contains("libzlib-dev"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn analyze_empty_dir_shows_empty_table() {
        let temp = TempDir::new().unwrap();

        let ui = analyze(temp.path().to_path_buf());

        assert!(ui.has_message("No dependencies found"));
        assert_eq!(ui.tables().len(), 1);
        assert!(ui.tables()[0].contains("Apt Package"));
    }

    #[test]
    fn analyze_missing_path_warns() {
        let temp = TempDir::new().unwrap();

        let ui = analyze(temp.path().join("nope"));

        assert!(ui.has_warning("Path does not exist"));
        assert!(ui.has_message("No dependencies found"));
    }

    #[test]
    fn analyze_file_path_warns() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("CMakeLists.txt");
        fs::write(&file, "find_package(ZLIB)\n").unwrap();

        let ui = analyze(file);

        assert!(ui.has_warning("Not a directory"));
        assert!(ui.has_message("No dependencies found"));
        assert!(!ui.tables()[0].contains("libzlib-dev"));
    }

    #[test]
    fn mapping_table_lists_rows_in_name_order() {
        let mapping = suggest_packages(["zlib", "curl"]);
        let rendered = mapping_table(&mapping).render();

        let curl = rendered.find("libcurl-dev").unwrap();
        let zlib = rendered.find("libzlib-dev").unwrap();
        assert!(curl < zlib);
    }
}

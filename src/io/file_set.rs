//! Input file enumeration and ordering
//!
//! Lists the CSV files of the input directory in processing order. The
//! ordering key is the integer filename prefix before the first underscore
//! (`1_report.csv` sorts as 1); files without a parseable prefix sort as 0.
//! The sort is stable, so equal keys keep the directory's enumeration order,
//! which is platform-defined. Chronological ordering across files is an
//! external precondition encoded in the filenames; it is not verified here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// List the directory's CSV files sorted by numeric filename prefix
///
/// Non-recursive: only direct entries are considered, and directories among
/// them are skipped. The `.csv` suffix match is case-insensitive.
///
/// # Errors
///
/// Propagates the underlying I/O error if the directory or one of its
/// entries cannot be read.
pub fn sorted_csv_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().to_lowercase().ends_with(".csv") {
            files.push(entry.path());
        }
    }

    // Stable sort: equal keys keep enumeration order.
    files.sort_by_key(|path| {
        path.file_name()
            .map(|name| numeric_prefix(&name.to_string_lossy()))
            .unwrap_or(0)
    });

    Ok(files)
}

/// Extract the numeric prefix of a filename (`"10_report.csv"` -> 10)
///
/// Returns 0 when there is no underscore or the prefix is not an integer.
fn numeric_prefix(filename: &str) -> i64 {
    match filename.split_once('_') {
        Some((prefix, _)) => prefix.parse().unwrap_or(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("Failed to create test file");
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[rstest]
    #[case::simple("1_report.csv", 1)]
    #[case::multi_digit("10_report.csv", 10)]
    #[case::no_underscore("report.csv", 0)]
    #[case::non_numeric_prefix("x_report.csv", 0)]
    #[case::empty_prefix("_report.csv", 0)]
    #[case::negative_prefix("-5_report.csv", -5)]
    fn test_numeric_prefix(#[case] filename: &str, #[case] expected: i64) {
        assert_eq!(numeric_prefix(filename), expected);
    }

    #[test]
    fn test_orders_files_by_numeric_prefix() {
        let dir = tempdir().expect("Failed to create temp dir");
        for name in [
            "3_report.csv",
            "1_report.csv",
            "10_report.csv",
            "2_report.csv",
            "report.csv",
        ] {
            touch(dir.path(), name);
        }

        let files = sorted_csv_files(dir.path()).unwrap();
        assert_eq!(
            file_names(&files),
            vec![
                "report.csv",
                "1_report.csv",
                "2_report.csv",
                "3_report.csv",
                "10_report.csv",
            ]
        );
    }

    #[test]
    fn test_filters_to_csv_case_insensitive() {
        let dir = tempdir().expect("Failed to create temp dir");
        touch(dir.path(), "1_report.csv");
        touch(dir.path(), "2_report.CSV");
        touch(dir.path(), "3_report.Csv");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "4_report.csv.bak");

        let files = sorted_csv_files(dir.path()).unwrap();
        assert_eq!(
            file_names(&files),
            vec!["1_report.csv", "2_report.CSV", "3_report.Csv"]
        );
    }

    #[test]
    fn test_skips_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("nested.csv")).unwrap();
        touch(dir.path(), "1_report.csv");

        let files = sorted_csv_files(dir.path()).unwrap();
        assert_eq!(file_names(&files), vec!["1_report.csv"]);
    }

    #[test]
    fn test_empty_directory_yields_empty_set() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert!(sorted_csv_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("absent");
        assert!(sorted_csv_files(&missing).is_err());
    }
}

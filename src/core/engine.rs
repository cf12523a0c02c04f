//! Filtering orchestration
//!
//! `FilterEngine` ties the components together: it validates the input
//! directory, enumerates the CSV files in numeric-prefix order, streams each
//! file line by line, classifies every parsed record against the time
//! window, writes included records to the single output file, and halts all
//! further processing on the first `Stop`.
//!
//! # Early exit
//!
//! Files are pre-ordered chronologically and each file's records are assumed
//! internally time-ordered, so a `Stop` classification is a safe global
//! early-exit: no record in the current or any later file can still fall
//! inside the window. A run therefore costs O(records up to the cutoff)
//! rather than O(total records) in the typical case.
//!
//! # Resource discipline
//!
//! The run owns one output writer, finished exactly once on success and
//! dropped (handle released) on every failure path. Each input reader is
//! scoped to its file and dropped before the next file opens, including on
//! early returns. Processing is strictly sequential and synchronous; every
//! error is fatal to the run, and output written before a failure remains on
//! disk.

use crate::core::window::{RangeCheck, TimeWindow};
use crate::io::file_set::sorted_csv_files;
use crate::io::line_reader::LineReader;
use crate::io::line_writer::LineWriter;
use crate::io::record_format::parse_line;
use crate::types::FilterError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed output filename, created fresh in the working directory each run
pub const OUTPUT_FILE: &str = "filtered_result.csv";

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Input files opened before the run finished or stopped early
    pub files_scanned: usize,
    /// Records written to the output file
    pub records_written: usize,
}

/// Result of scanning one input file
struct ScanOutcome {
    written: usize,
    stop: bool,
}

/// Orchestrator for one filtering run
///
/// Holds the immutable time window and the output path; [`run`](Self::run)
/// executes the whole pipeline against an input directory.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    window: TimeWindow,
    output_path: PathBuf,
}

impl FilterEngine {
    /// Create an engine writing to the fixed [`OUTPUT_FILE`]
    pub fn new(window: TimeWindow) -> Self {
        Self::with_output_path(window, OUTPUT_FILE)
    }

    /// Create an engine writing to an explicit output path
    ///
    /// The CLI always uses [`OUTPUT_FILE`]; this constructor exists for
    /// library callers and tests.
    pub fn with_output_path(window: TimeWindow, output_path: impl Into<PathBuf>) -> Self {
        Self {
            window,
            output_path: output_path.into(),
        }
    }

    /// Run the filter over a directory of CSV transaction logs
    ///
    /// Validates the directory, enumerates its CSV files in numeric-prefix
    /// order, and scans them sequentially, writing every in-window record's
    /// raw line to the output file. Scanning ceases globally on the first
    /// record at or past the window's end.
    ///
    /// # Errors
    ///
    /// Fails fast on the first problem: an empty directory argument, a
    /// missing or non-directory path, an unlistable directory, a directory
    /// with no CSV files, a line that fails to parse (reported with file and
    /// 1-based line number), or any read, write, or flush error.
    pub fn run(&self, dir: &str) -> Result<RunSummary, FilterError> {
        if dir.is_empty() {
            return Err(FilterError::empty_argument("directory"));
        }

        let dir_path = Path::new(dir);
        match fs::metadata(dir_path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(FilterError::NotADirectory {
                    path: dir.to_string(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FilterError::DirectoryNotFound {
                    path: dir.to_string(),
                })
            }
            Err(e) => {
                return Err(FilterError::DirectoryRead {
                    path: dir.to_string(),
                    message: e.to_string(),
                })
            }
        }

        let files = sorted_csv_files(dir_path).map_err(|e| FilterError::DirectoryRead {
            path: dir.to_string(),
            message: e.to_string(),
        })?;
        if files.is_empty() {
            return Err(FilterError::NoFilesFound {
                path: dir.to_string(),
            });
        }

        let mut writer =
            LineWriter::create(&self.output_path).map_err(|e| FilterError::OutputCreate {
                path: self.output_path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut summary = RunSummary {
            files_scanned: 0,
            records_written: 0,
        };
        for file in &files {
            summary.files_scanned += 1;
            let outcome = self.scan_file(file, &mut writer)?;
            summary.records_written += outcome.written;
            if outcome.stop {
                // Data is sequential; no later file can contain in-window records.
                break;
            }
        }

        writer
            .finish()
            .map_err(|e| FilterError::FlushFailed {
                message: e.to_string(),
            })?;

        Ok(summary)
    }

    /// Scan one file, writing included records; reports whether to stop globally
    ///
    /// Line numbers are 1-based and count every yielded line. Empty lines
    /// are skipped before any parse attempt; a whitespace-only line is not
    /// empty and fails parsing. The reader is dropped on every exit path.
    fn scan_file(&self, path: &Path, writer: &mut LineWriter) -> Result<ScanOutcome, FilterError> {
        let reader = LineReader::open(path).map_err(|e| FilterError::read_failed(path, &e))?;

        let mut written = 0;
        for (index, line) in reader.enumerate() {
            let line = line.map_err(|e| FilterError::read_failed(path, &e))?;
            if line.is_empty() {
                continue;
            }

            let record = parse_line(&line)
                .map_err(|source| FilterError::record_parse(path, index + 1, source))?;

            match self.window.classify(record.trx_date) {
                RangeCheck::Include => {
                    writer
                        .write_line(&record.raw)
                        .map_err(|e| FilterError::WriteFailed {
                            message: e.to_string(),
                        })?;
                    written += 1;
                }
                RangeCheck::Skip => {}
                RangeCheck::Stop => {
                    return Ok(ScanOutcome {
                        written,
                        stop: true,
                    })
                }
            }
        }

        Ok(ScanOutcome {
            written,
            stop: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParseLineError;
    use std::fs;
    use tempfile::tempdir;

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::parse(start, end).expect("test window should parse")
    }

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("Failed to write test file");
    }

    #[test]
    fn test_run_rejects_empty_directory_argument() {
        let engine = FilterEngine::new(window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"));
        assert_eq!(
            engine.run(""),
            Err(FilterError::empty_argument("directory"))
        );
    }

    #[test]
    fn test_run_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");
        let engine = FilterEngine::new(window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"));

        let result = engine.run(missing.to_str().unwrap());
        assert!(matches!(result, Err(FilterError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_run_rejects_file_as_directory() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "plain.csv", "");
        let path = dir.path().join("plain.csv");
        let engine = FilterEngine::new(window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"));

        let result = engine.run(path.to_str().unwrap());
        assert!(matches!(result, Err(FilterError::NotADirectory { .. })));
    }

    #[test]
    fn test_run_rejects_directory_without_csv_files() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "notes.txt", "not a csv");
        let engine = FilterEngine::new(window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"));

        let result = engine.run(dir.path().to_str().unwrap());
        assert!(matches!(result, Err(FilterError::NoFilesFound { .. })));
    }

    #[test]
    fn test_run_writes_only_in_window_records() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        write_file(
            input.path(),
            "1_report.csv",
            "1,2025-06-27T23:00:00Z,before,10\n\
             2,2025-06-28T01:00:00Z,inside,20\n\
             3,2025-06-29T01:00:00Z,inside,30\n",
        );
        let output_path = output.path().join("out.csv");
        let engine = FilterEngine::with_output_path(
            window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"),
            &output_path,
        );

        let summary = engine.run(input.path().to_str().unwrap()).unwrap();
        assert_eq!(summary.records_written, 2);
        assert_eq!(summary.files_scanned, 1);

        let content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(
            content,
            "2,2025-06-28T01:00:00Z,inside,20\n3,2025-06-29T01:00:00Z,inside,30\n"
        );
    }

    #[test]
    fn test_run_stops_across_files_on_first_out_of_window_record() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        write_file(
            input.path(),
            "1_report.csv",
            "1,2025-06-28T01:00:00Z,inside,10\n",
        );
        // First record already past the window end; nothing from this file is
        // written and file 3 is never opened.
        write_file(
            input.path(),
            "2_report.csv",
            "2,2025-07-03T00:00:00Z,at end,20\n3,not-even-a-date,garbage,30\n",
        );
        write_file(
            input.path(),
            "3_report.csv",
            "4,also not a date,garbage,40\n",
        );
        let output_path = output.path().join("out.csv");
        let engine = FilterEngine::with_output_path(
            window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"),
            &output_path,
        );

        let summary = engine.run(input.path().to_str().unwrap()).unwrap();
        assert_eq!(summary.records_written, 1);
        assert_eq!(summary.files_scanned, 2);

        let content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "1,2025-06-28T01:00:00Z,inside,10\n");
    }

    #[test]
    fn test_run_skips_empty_lines_without_parsing() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        write_file(
            input.path(),
            "1_report.csv",
            "\n1,2025-06-28T01:00:00Z,inside,10\n\n2,2025-06-28T02:00:00Z,inside,20\n",
        );
        let output_path = output.path().join("out.csv");
        let engine = FilterEngine::with_output_path(
            window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"),
            &output_path,
        );

        let summary = engine.run(input.path().to_str().unwrap()).unwrap();
        assert_eq!(summary.records_written, 2);
    }

    #[test]
    fn test_run_reports_parse_failure_with_file_and_line() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        write_file(
            input.path(),
            "1_report.csv",
            "1,2025-06-28T01:00:00Z,fine,10\n\nbroken line\n",
        );
        let output_path = output.path().join("out.csv");
        let engine = FilterEngine::with_output_path(
            window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"),
            &output_path,
        );

        let result = engine.run(input.path().to_str().unwrap());
        let expected_path = input.path().join("1_report.csv");
        assert_eq!(
            result,
            Err(FilterError::record_parse(
                &expected_path,
                3,
                ParseLineError::InvalidFormat
            ))
        );
    }

    #[test]
    fn test_run_truncates_prior_output() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        write_file(
            input.path(),
            "1_report.csv",
            "1,2025-06-28T01:00:00Z,inside,10\n",
        );
        let output_path = output.path().join("out.csv");
        fs::write(&output_path, "stale line from a previous run\n").unwrap();

        let engine = FilterEngine::with_output_path(
            window("2025-06-28T00:00:00Z", "2025-07-03T00:00:00Z"),
            &output_path,
        );
        engine.run(input.path().to_str().unwrap()).unwrap();

        let content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "1,2025-06-28T01:00:00Z,inside,10\n");
    }

    #[test]
    fn test_run_with_degenerate_window_writes_nothing() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        write_file(
            input.path(),
            "1_report.csv",
            "1,2025-06-28T01:00:00Z,anything,10\n",
        );
        let output_path = output.path().join("out.csv");
        let engine = FilterEngine::with_output_path(
            window("2025-07-03T00:00:00Z", "2025-06-28T00:00:00Z"),
            &output_path,
        );

        let summary = engine.run(input.path().to_str().unwrap()).unwrap();
        assert_eq!(summary.records_written, 0);
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "");
    }
}

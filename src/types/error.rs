//! Error types for the transaction log filter
//!
//! This module defines every error that can terminate a filtering run.
//! The policy is strictly fail-fast: there is no recovery or partial-success
//! mode, so the first error encountered (in file-then-line order) aborts the
//! run and is reported with enough context to locate it: the file path
//! and/or the 1-based line number.
//!
//! # Error Categories
//!
//! - **Argument errors**: missing/empty flags, malformed window bounds
//! - **Directory errors**: missing, not a directory, unreadable, empty of CSVs
//! - **Per-line parse errors**: malformed record, bad field values
//! - **I/O errors**: stream reads, output creation, writes, final flush
//!
//! I/O causes are stored as display strings rather than `std::io::Error`
//! values so both enums stay `Clone + PartialEq` for test assertions.

use thiserror::Error;

/// Failure modes of [`parse_line`](crate::io::record_format::parse_line)
///
/// A record line is valid only if all four fields are present and fields
/// 1, 2, 4 parse; field 3 accepts any text. Each variant carries the
/// offending field value where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLineError {
    /// The line is empty after trimming, or does not split into exactly
    /// four top-level comma-separated fields.
    #[error("invalid record format: expected 4 comma-separated fields")]
    InvalidFormat,

    /// Field 1 is not a valid integer transaction number.
    #[error("invalid transaction number '{value}'")]
    InvalidTrxNo {
        /// The unparseable field text (trimmed)
        value: String,
    },

    /// Field 2 is not a valid RFC 3339 date-time with offset.
    #[error("invalid transaction date '{value}': expected RFC 3339 date-time with offset")]
    InvalidDate {
        /// The unparseable field text (trimmed)
        value: String,
    },

    /// Field 4 is not a valid integer amount.
    #[error("invalid amount '{value}'")]
    InvalidAmount {
        /// The unparseable field text (trimmed)
        value: String,
    },
}

/// Main error type for a filtering run
///
/// Every variant is fatal; the orchestrator propagates the first one it
/// meets and the CLI reports it as a single diagnostic line with a non-zero
/// exit status. Output already written before the failure remains on disk.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// A required argument was supplied empty.
    #[error("missing or empty argument: {name}")]
    EmptyArgument {
        /// The argument name (e.g. "directory", "start")
        name: String,
    },

    /// A window bound is not a valid RFC 3339 date-time with offset.
    #[error("invalid {bound} time '{value}': expected RFC 3339 date-time with offset")]
    InvalidTimeFormat {
        /// Which bound failed ("start" or "end")
        bound: String,
        /// The unparseable bound text
        value: String,
    },

    /// The input directory does not exist.
    #[error("directory does not exist: {path}")]
    DirectoryNotFound {
        /// The path that was not found
        path: String,
    },

    /// The input path exists but is not a directory.
    #[error("path is not a directory: {path}")]
    NotADirectory {
        /// The offending path
        path: String,
    },

    /// The input directory could not be listed.
    #[error("failed to read directory {path}: {message}")]
    DirectoryRead {
        /// The directory being listed
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// The input directory contains no CSV files.
    #[error("no CSV files found in directory: {path}")]
    NoFilesFound {
        /// The directory that was scanned
        path: String,
    },

    /// A record line failed to parse; aborts the whole run.
    #[error("{path} line {line}: {source}")]
    RecordParse {
        /// The file containing the bad line
        path: String,
        /// 1-based line number within that file
        line: usize,
        /// The field-level parse failure
        #[source]
        source: ParseLineError,
    },

    /// An input file could not be opened or read mid-stream.
    #[error("failed to read {path}: {message}")]
    ReadFailed {
        /// The input file
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// The output file could not be created.
    #[error("failed to create output file {path}: {message}")]
    OutputCreate {
        /// The output path
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// A line could not be written to the output file.
    #[error("failed to write output: {message}")]
    WriteFailed {
        /// Description of the underlying I/O error
        message: String,
    },

    /// Buffered output could not be flushed during finalization.
    #[error("failed to flush output: {message}")]
    FlushFailed {
        /// Description of the underlying I/O error
        message: String,
    },
}

impl FilterError {
    /// Create an EmptyArgument error
    pub fn empty_argument(name: &str) -> Self {
        FilterError::EmptyArgument {
            name: name.to_string(),
        }
    }

    /// Create an InvalidTimeFormat error for one window bound
    pub fn invalid_time_format(bound: &str, value: &str) -> Self {
        FilterError::InvalidTimeFormat {
            bound: bound.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a ReadFailed error from an I/O error
    pub fn read_failed(path: &std::path::Path, error: &std::io::Error) -> Self {
        FilterError::ReadFailed {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a RecordParse error locating a bad line
    pub fn record_parse(path: &std::path::Path, line: usize, source: ParseLineError) -> Self {
        FilterError::RecordParse {
            path: path.display().to_string(),
            line,
            source,
        }
    }
}

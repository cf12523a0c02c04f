//! Transaction Log Time-Window Filter
//!
//! # Overview
//!
//! This library scans a directory of numerically-ordered CSV transaction log
//! files and emits, to a single output file, only the records whose
//! timestamp falls in a half-open window `[start, end)`. Input files are
//! pre-sorted chronologically by numeric filename prefix and internally
//! time-ordered, which makes the first record at or past the window's end a
//! safe signal to stop scanning everything that remains.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types ([`Record`], error taxonomy)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::window`] - the time window and Include/Skip/Stop classifier
//!   - [`core::engine`] - run orchestration and the early-exit scan loop
//! - [`io`] - file enumeration, streaming line reads, record parsing, and
//!   buffered output
//!
//! # Record Format
//!
//! One record per line, four comma-separated fields:
//! `trxNo,trxDate,trxDetail,amount` with the date in strict RFC 3339 form
//! including a numeric offset or `Z`. Splitting stops after the third comma;
//! there is no CSV quoting. Included records are written back out as their
//! trimmed original line, preserving formatting exactly.
//!
//! # Error Policy
//!
//! Strictly fail-fast: the first parse or I/O error aborts the run, reported
//! with the file path and 1-based line number where applicable. Output
//! already written before a failure remains on disk.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{FilterEngine, RangeCheck, RunSummary, TimeWindow, OUTPUT_FILE};
pub use crate::io::{parse_line, parse_timestamp, sorted_csv_files, LineReader, LineWriter};
pub use crate::types::{FilterError, ParseLineError, Record};

//! Transaction record type
//!
//! One `Record` is produced per non-empty input line and consumed
//! immediately after classification; records are never retained past their
//! write step.

use chrono::{DateTime, FixedOffset};

/// A single parsed transaction log record
///
/// Built only by [`parse_line`](crate::io::record_format::parse_line) and
/// immutable once constructed. The `raw` field preserves the trimmed
/// original line verbatim, so an included record can be written back out
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Transaction number, parsed from field 1
    pub trx_no: i64,
    /// Transaction timestamp, parsed from field 2 with its UTC offset preserved
    pub trx_date: DateTime<FixedOffset>,
    /// Free-text detail, field 3 verbatim (not trimmed)
    pub detail: String,
    /// Transaction amount, parsed from field 4
    pub amount: i64,
    /// The whitespace-trimmed source line, preserved for output
    pub raw: String,
}

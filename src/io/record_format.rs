//! Record line format handling
//!
//! Pure conversion functions between raw text and structured values: one
//! transaction log line to a [`Record`], and RFC 3339 text to a timestamp.
//! Nothing here touches the filesystem.
//!
//! # Field splitting
//!
//! A record line is split on commas into at most four parts. Splitting stops
//! after the third comma, so any further commas stay inside the fourth part
//! rather than producing extra fields. There is no CSV quoting or escaping
//! logic; a comma inside the free-text detail field bleeds into the final
//! field and normally fails the amount parse. This intentionally matches
//! the input format contract rather than general CSV semantics.

use crate::types::{ParseLineError, Record};
use chrono::{DateTime, FixedOffset};

/// Parse an RFC 3339 timestamp, preserving its UTC offset
///
/// The format is strict: a full date-time with either a numeric offset
/// (`2025-06-28T09:23:55+07:00`) or the `Z` designator. Date-only text,
/// space-separated date-times, offset-less date-times, and empty input all
/// fail. Used both for CLI window bounds and per-record dates.
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text)
}

/// Parse one transaction log line into a [`Record`]
///
/// The line is trimmed of leading/trailing whitespace first; the trimmed
/// text becomes the record's `raw` field. Fields are, in order:
/// transaction number (integer), timestamp (RFC 3339 with offset),
/// free-text detail (kept verbatim, not trimmed), amount (integer).
///
/// # Errors
///
/// - [`ParseLineError::InvalidFormat`] if the trimmed line is empty or does
///   not split into exactly four parts
/// - [`ParseLineError::InvalidTrxNo`] if field 1 is not an integer
/// - [`ParseLineError::InvalidDate`] if field 2 is not a strict RFC 3339
///   date-time with offset
/// - [`ParseLineError::InvalidAmount`] if field 4 is not an integer
pub fn parse_line(line: &str) -> Result<Record, ParseLineError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseLineError::InvalidFormat);
    }

    let parts: Vec<&str> = line.splitn(4, ',').collect();
    if parts.len() != 4 {
        return Err(ParseLineError::InvalidFormat);
    }

    let trx_no_text = parts[0].trim();
    let trx_no = trx_no_text
        .parse::<i64>()
        .map_err(|_| ParseLineError::InvalidTrxNo {
            value: trx_no_text.to_string(),
        })?;

    let date_text = parts[1].trim();
    let trx_date = parse_timestamp(date_text).map_err(|_| ParseLineError::InvalidDate {
        value: date_text.to_string(),
    })?;

    let amount_text = parts[3].trim();
    let amount = amount_text
        .parse::<i64>()
        .map_err(|_| ParseLineError::InvalidAmount {
            value: amount_text.to_string(),
        })?;

    Ok(Record {
        trx_no,
        trx_date,
        detail: parts[2].to_string(),
        amount,
        raw: line.to_string(),
    })
}

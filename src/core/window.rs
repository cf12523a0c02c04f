//! Time window classification
//!
//! The half-open window `[start, end)` and the three-way classification of a
//! record timestamp against it. This is the decision at the heart of the
//! filter: `Skip` and `Include` advance the scan, while `Stop` is a global
//! early-exit signal. Because input files are pre-ordered chronologically and
//! internally time-ordered, a timestamp at or past `end` guarantees that no
//! later record, in this file or any subsequent file, can still fall inside
//! the window.

use crate::io::record_format::parse_timestamp;
use crate::types::FilterError;
use chrono::{DateTime, FixedOffset};

/// Outcome of classifying one timestamp against the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    /// `start <= t < end`: the record belongs in the output
    Include,
    /// `t < start`: before the window, continue scanning
    Skip,
    /// `t >= end`: past the window, cease all further processing
    Stop,
}

/// Half-open time window `[start, end)`
///
/// `start` is inclusive, `end` exclusive; both preserve their UTC offsets
/// while comparisons are made on the instants they denote. Immutable for the
/// duration of a run. No `start < end` invariant is enforced: a degenerate
/// window with `start >= end` never classifies any timestamp as
/// [`RangeCheck::Include`] (timestamps below `start` still classify
/// [`RangeCheck::Skip`]; everything at or past `start` is
/// [`RangeCheck::Stop`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeWindow {
    /// Build a window from already-parsed bounds
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    /// Build a window from the CLI's textual bounds
    ///
    /// # Errors
    ///
    /// - [`FilterError::EmptyArgument`] if either bound is empty
    /// - [`FilterError::InvalidTimeFormat`] if either bound is not a strict
    ///   RFC 3339 date-time with offset, naming the offending bound
    pub fn parse(start_text: &str, end_text: &str) -> Result<Self, FilterError> {
        let start = Self::parse_bound("start", start_text)?;
        let end = Self::parse_bound("end", end_text)?;
        Ok(Self::new(start, end))
    }

    fn parse_bound(bound: &str, text: &str) -> Result<DateTime<FixedOffset>, FilterError> {
        if text.is_empty() {
            return Err(FilterError::empty_argument(bound));
        }
        parse_timestamp(text).map_err(|_| FilterError::invalid_time_format(bound, text))
    }

    /// Inclusive lower bound
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Exclusive upper bound
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Classify a timestamp against the window
    ///
    /// Exactly one variant holds for any timestamp: `t < start` is
    /// [`RangeCheck::Skip`], `t >= end` is [`RangeCheck::Stop`], anything
    /// else is [`RangeCheck::Include`]. The boundaries are exact: `start`
    /// itself is Include (when `start < end`), `end` itself is always Stop.
    /// Pure and stateless; no dependency on prior records.
    pub fn classify(&self, t: DateTime<FixedOffset>) -> RangeCheck {
        if t < self.start {
            return RangeCheck::Skip;
        }
        if t >= self.end {
            return RangeCheck::Stop;
        }
        RangeCheck::Include
    }

    /// Whether `start <= t < end`
    pub fn contains(&self, t: DateTime<FixedOffset>) -> bool {
        self.classify(t) == RangeCheck::Include
    }
}

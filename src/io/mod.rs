//! I/O module
//!
//! Handles input enumeration, streaming reads, record line parsing, and
//! buffered output.
//!
//! # Components
//!
//! - `file_set` - CSV file enumeration ordered by numeric filename prefix
//! - `line_reader` - streaming line-by-line reader over one input file
//! - `line_writer` - buffered writer for the single output file
//! - `record_format` - pure line and timestamp parsing

pub mod file_set;
pub mod line_reader;
pub mod line_writer;
pub mod record_format;

pub use file_set::sorted_csv_files;
pub use line_reader::LineReader;
pub use line_writer::LineWriter;
pub use record_format::{parse_line, parse_timestamp};

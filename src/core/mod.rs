//! Core module
//!
//! Business logic components:
//! - `window` - the half-open time window and Include/Skip/Stop classifier
//! - `engine` - run orchestration (validation, enumeration, scan loop)

pub mod engine;
pub mod window;

pub use engine::{FilterEngine, RunSummary, OUTPUT_FILE};
pub use window::{RangeCheck, TimeWindow};

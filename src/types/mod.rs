//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: the parsed transaction record
//! - `error`: error types for the filtering run

pub mod error;
pub mod record;

pub use error::{FilterError, ParseLineError};
pub use record::Record;

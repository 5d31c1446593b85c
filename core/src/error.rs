//! Error types for the indicator engine and the chart layout policy.
//!
//! Numeric edge cases (division by zero, flat windows, missing prices) are
//! never errors; they are resolved into tagged values inside the columns.
//! Only structural problems surface here.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Column;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A layout asked for a column the table does not carry.
    #[error("layout `{layout}` requires column `{column}` which the table does not contain")]
    MissingColumn {
        layout: &'static str,
        column: Column,
    },

    /// Observation dates must be unique and strictly increasing.
    #[error("dates must be strictly increasing: {previous} is followed by {next}")]
    UnorderedDates { previous: NaiveDate, next: NaiveDate },

    /// A derived column does not line up with the table's dates.
    #[error("column `{column}` has {actual} values but the table has {expected} dates")]
    LengthMismatch {
        column: Column,
        expected: usize,
        actual: usize,
    },

    #[error("invalid indicator configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

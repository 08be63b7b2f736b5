use thiserror::Error;

use super::EntryId;

/// Rejection reasons for a new subscription entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("service name must not be empty")]
    EmptyName,

    #[error("monthly cost must be a number greater than 0 (got '{0}')")]
    InvalidCost(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("no subscription at position {index} (list has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    #[error("'{0}' is not a valid position")]
    NotAnInteger(String),

    #[error("no subscription with id {0}")]
    UnknownId(EntryId),
}

use thiserror::Error;

use crate::domain::{IndexError, ValidationError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid subscription: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot delete: {0}")]
    Index(#[from] IndexError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

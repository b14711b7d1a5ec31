//! Employees service errors.

use thiserror::Error;

use crate::api::{ApiError, ApiFailure};

#[derive(Debug, Error)]
pub enum EmployeesServiceError {
    #[error("employee not found")]
    NotFound,

    #[error("salary cannot be negative")]
    InvalidSalary,

    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl EmployeesServiceError {
    /// Whether the employee was missing, on either backend.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound => true,
            Self::Api(error) => error.is_not_found(),
            Self::InvalidSalary | Self::MissingRequiredField(_) => false,
        }
    }
}

impl ApiFailure for EmployeesServiceError {
    fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            Self::NotFound | Self::InvalidSalary | Self::MissingRequiredField(_) => None,
        }
    }
}

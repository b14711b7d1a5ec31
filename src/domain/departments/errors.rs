//! Departments service errors.

use thiserror::Error;

use crate::api::{ApiError, ApiFailure};

#[derive(Debug, Error)]
pub enum DepartmentsServiceError {
    #[error("department not found")]
    NotFound,

    #[error("cannot delete department that has existing employees")]
    HasEmployees,

    #[error("department name is required")]
    MissingName,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DepartmentsServiceError {
    /// Whether the department was missing, on either backend.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound => true,
            Self::Api(error) => error.is_not_found(),
            Self::HasEmployees | Self::MissingName => false,
        }
    }
}

impl ApiFailure for DepartmentsServiceError {
    fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            Self::NotFound | Self::HasEmployees | Self::MissingName => None,
        }
    }
}

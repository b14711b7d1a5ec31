//! Auth service errors.

use thiserror::Error;

use crate::{
    api::{ApiError, ApiFailure},
    session::SessionError,
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("failed to update session")]
    Session(#[source] SessionError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<SessionError> for AuthServiceError {
    fn from(error: SessionError) -> Self {
        Self::Session(error)
    }
}

impl ApiFailure for AuthServiceError {
    fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            Self::PasswordMismatch | Self::Session(_) => None,
        }
    }
}

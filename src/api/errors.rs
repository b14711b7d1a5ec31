//! Transport errors for the remote service.

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was dispatched but no response arrived.
    #[error("no response from server")]
    NoResponse(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server responded with {status}")]
    Status {
        /// HTTP status code.
        status: StatusCode,

        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response body")]
    Decode(#[source] reqwest::Error),

    /// The request could not be built.
    #[error("failed to build request")]
    Request(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::Request(error)
        } else {
            Self::NoResponse(error)
        }
    }

    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Self::Status {
            status,
            message: extract_message(&body),
        }
    }

    /// The status code, when a response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::NoResponse(_) | Self::Decode(_) | Self::Request(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|status| status.is_client_error())
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|status| status.is_server_error())
    }

    /// Server-supplied message, falling back to the status text.
    ///
    /// Returns `None` when no response was received.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let Self::Status { status, message } = self else {
            return None;
        };

        let message = message.clone().unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_string(), ToString::to_string)
        });

        Some(message)
    }
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty())
}

/// Errors that may wrap a transport failure.
pub trait ApiFailure: std::error::Error {
    /// The underlying transport failure, if this error came from the remote service.
    fn api_error(&self) -> Option<&ApiError>;
}

impl ApiFailure for ApiError {
    fn api_error(&self) -> Option<&ApiError> {
        Some(self)
    }
}

//! Turns service failures into user-facing messages.

use std::sync::Arc;

use tracing::warn;

use crate::{
    api::{ApiError, ApiFailure},
    session::{LOGIN_ROUTE, Navigator, SessionStore},
};

/// Message shown when a request was sent but nothing came back.
pub const NO_RESPONSE_MESSAGE: &str =
    "No response from server. Please check your internet connection.";

/// Message shown when an error carries no text of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Maps errors from any backend to display text.
///
/// An unauthorized response also ends the session: the stored token is
/// cleared and the navigator is sent to [`LOGIN_ROUTE`].
#[derive(Debug, Clone)]
pub struct ErrorTranslator {
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ErrorTranslator {
    #[must_use]
    pub fn new(session: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn translate<E: ApiFailure + ?Sized>(&self, error: &E) -> String {
        let message = match error.api_error() {
            Some(api) if api.status().is_some() => {
                if api.is_unauthorized() {
                    self.end_session();
                }

                api.message()
                    .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
            }
            Some(ApiError::NoResponse(_)) => NO_RESPONSE_MESSAGE.to_string(),
            Some(_) | None => describe(error),
        };

        warn!(%message, "request failed: {error}");

        message
    }

    fn end_session(&self) {
        if let Err(source) = self.session.clear() {
            warn!("failed to clear session token: {source}");
        }

        self.navigator.redirect(LOGIN_ROUTE);
    }
}

fn describe<E: ApiFailure + ?Sized>(error: &E) -> String {
    let text = error.to_string();

    if text.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        text
    }
}

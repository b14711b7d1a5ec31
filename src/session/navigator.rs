//! Navigation side effects.

use std::{
    fmt::Debug,
    sync::{Mutex, PoisonError},
};

use mockall::automock;
use tracing::info;

/// Route the user is sent to when the session is no longer valid.
pub const LOGIN_ROUTE: &str = "/login";

/// Receives navigation requests raised outside the view layer.
#[automock]
pub trait Navigator: Debug + Send + Sync {
    /// Sends the user to `route`.
    fn redirect(&self, route: &str);
}

/// Navigator that records every redirect it receives.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All routes redirected to so far, oldest first.
    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent redirect target.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: &str) {
        info!(route, "redirecting");

        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_string());
    }
}

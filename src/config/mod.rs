//! Client configuration module

use clap::Args;

use crate::config::{backend::BackendConfig, logging::LoggingConfig, session::SessionConfig};

pub mod backend;
pub mod logging;
pub mod session;

/// Settings shared by every command.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Data backend settings.
    #[command(flatten)]
    pub backend: BackendConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Session persistence settings.
    #[command(flatten)]
    pub session: SessionConfig,
}

//! Backend Config

use clap::Args;

use crate::{
    api::{ApiConfig, DEFAULT_BASE_URL},
    context::Backend,
};

/// Data backend selection.
#[derive(Debug, Args)]
pub struct BackendConfig {
    /// Data backend (http, mock)
    #[arg(long, env = "BACKEND", value_enum, default_value_t = Backend::Http)]
    pub backend: Backend,

    /// Base URL of the staff service
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,
}

impl BackendConfig {
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_base_url.clone(),
        }
    }
}

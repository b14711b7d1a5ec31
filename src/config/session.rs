//! Session Config

use std::path::PathBuf;

use clap::Args;

/// Where the bearer token is kept between runs.
pub const DEFAULT_SESSION_FILE: &str = ".staffdesk/session.json";

/// Session persistence settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Session file holding the bearer token
    #[arg(long, env = "SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
    pub session_file: PathBuf,
}

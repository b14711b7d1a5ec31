//! Remote service transport

mod client;
mod errors;

pub(crate) use client::WithId;
pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use errors::{ApiError, ApiFailure};

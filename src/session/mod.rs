//! Client Session

mod errors;
mod navigator;
mod store;

pub use errors::SessionError;
pub use navigator::*;
pub use store::*;

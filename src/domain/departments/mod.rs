//! Departments

pub mod data;
pub mod errors;
mod http;
mod in_memory;
pub mod records;
pub mod service;

pub use errors::DepartmentsServiceError;
pub use http::HttpDepartmentsService;
pub use in_memory::InMemoryDepartmentsService;
pub use service::*;

//! Employees

pub mod data;
mod details;
pub mod errors;
mod http;
mod in_memory;
pub mod records;
pub mod service;

pub use details::expand_employees;
pub use errors::EmployeesServiceError;
pub use http::HttpEmployeesService;
pub use in_memory::InMemoryEmployeesService;
pub use service::*;

//! Staff Domain Concerns

mod dates;
pub mod departments;
pub mod employees;

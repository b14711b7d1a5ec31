//! Staffdesk
//!
//! Data-access layer for employee and department records, backed either by a
//! remote REST service or by an in-memory store.

pub mod api;
pub mod auth;
pub mod config;
pub mod context;
pub mod domain;
pub mod ids;
pub mod observability;
pub mod session;
pub mod store;
pub mod tables;
pub mod translator;

#[cfg(test)]
mod test;

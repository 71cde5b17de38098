//! Core types and trait definitions for the Rolodex contact service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod contact;
pub mod error;
pub mod query;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use validate::ValidationError;

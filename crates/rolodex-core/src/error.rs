//! Error types for `rolodex-core`.

use thiserror::Error;

/// Domain outcomes a store reports besides success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("contact not found: {0}")]
  NotFound(i64),

  #[error("email already in use: {0}")]
  EmailTaken(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

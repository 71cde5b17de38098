//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rolodex_core::{ValidationError, store::StoreFailure};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler. Each variant maps to exactly one
/// status code.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Validation(#[from] ValidationError),

  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a backend error by the domain outcome it carries.
  pub fn from_store<E: StoreFailure>(e: E) -> Self {
    match e.outcome() {
      Some(rolodex_core::Error::NotFound(id)) => {
        ApiError::NotFound(format!("contact {id} not found"))
      }
      Some(rolodex_core::Error::EmailTaken(_)) => {
        ApiError::Conflict("email already exists".to_owned())
      }
      None => ApiError::Store(Box::new(e)),
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = match &self {
      // Backend detail stays in the log.
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        "internal server error".to_owned()
      }
      other => {
        tracing::debug!(%status, error = %other, "request rejected");
        other.to_string()
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

//! JSON REST API for Rolodex.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rolodex_core::store::ContactStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = rolodex_api::api_router(Arc::new(store), Paging::default());
//! ```

pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use rolodex_core::store::ContactStore;
use thiserror::Error;

pub use error::ApiError;

// ─── Paging ───────────────────────────────────────────────────────────────────

/// Page-size bounds for `GET /contacts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
  /// Used when the request has no `limit`.
  pub default_limit: u32,
  /// Requests with a larger `limit` are rejected.
  pub max_limit:     u32,
}

#[derive(Debug, Error)]
#[error("default_limit ({default_limit}) must be between 1 and max_limit ({max_limit})")]
pub struct InvalidPaging {
  pub default_limit: u32,
  pub max_limit:     u32,
}

impl Paging {
  pub fn new(default_limit: u32, max_limit: u32) -> Result<Self, InvalidPaging> {
    if default_limit == 0 || default_limit > max_limit {
      return Err(InvalidPaging { default_limit, max_limit });
    }
    Ok(Self { default_limit, max_limit })
  }
}

impl Default for Paging {
  fn default() -> Self { Self { default_limit: 10, max_limit: 50 } }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub paging: Paging,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), paging: self.paging }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, paging: Paging) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>).delete(contacts::delete_one::<S>),
    )
    .with_state(AppState { store, paging })
}

// ─── Integration tests ────────────────────────────────────────────────────────

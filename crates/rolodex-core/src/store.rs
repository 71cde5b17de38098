//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `rolodex-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  contact::{Contact, NewContact},
  error::Error,
  query::ContactQuery,
};

/// A backend error that may carry one of the domain outcomes in [`Error`].
///
/// Lets callers tell `NotFound` and `EmailTaken` apart from I/O failures
/// without knowing the backend's error type.
pub trait StoreFailure: std::error::Error + Send + Sync + 'static {
  fn outcome(&self) -> Option<&Error>;
}

/// Abstraction over a contact store backend.
///
/// The store is the sole owner of record lifetime. Contacts are never
/// updated; they are created, read, and deleted.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: StoreFailure;

  /// Persist a new contact and return it with its assigned id.
  ///
  /// Fails with [`Error::EmailTaken`] if another contact already uses
  /// `input.email`. The check is atomic with the insert.
  fn create(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Fails with [`Error::NotFound`] if no contact has this id.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Permanently remove a contact. Fails with [`Error::NotFound`] if no
  /// contact has this id.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Return one page of contacts matching `query`.
  fn list<'a>(
    &'a self,
    query: &'a ContactQuery,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;
}

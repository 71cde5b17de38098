//! The contact record and its creation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact.
///
/// `id` is assigned by the store, increases monotonically and is never reused
/// after deletion. `email` is unique across all stored contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub phone:      Option<String>,
  pub company:    Option<String>,
  pub created_at: DateTime<Utc>,
}

/// Input to [`ContactStore::create`](crate::store::ContactStore::create).
///
/// Only constructed from validated input; see
/// [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub phone:   Option<String>,
  pub company: Option<String>,
}

impl NewContact {
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      name:    name.into(),
      email:   email.into(),
      phone:   None,
      company: None,
    }
  }

  pub fn with_company(mut self, company: impl Into<String>) -> Self {
    self.company = Some(company.into());
    self
  }

  pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
    self.phone = Some(phone.into());
    self
  }
}

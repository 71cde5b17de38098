//! Shape validation for contact input.
//!
//! Runs before anything reaches a store. Every check returns a
//! [`ValidationError`] naming the offending field instead of panicking.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Input rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
  pub field:   &'static str,
  pub message: String,
}

impl ValidationError {
  pub fn new(field: &'static str, message: impl Into<String>) -> Self {
    Self { field, message: message.into() }
  }
}

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

/// Dot-atom local part, and a domain of at least two hostname labels.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
  )
  .expect("email regex must compile")
});

/// Returns the name with surrounding whitespace removed, or an error if
/// nothing is left.
pub fn validate_name(name: Option<&str>) -> Result<String, ValidationError> {
  let Some(name) = name else {
    return Err(ValidationError::new("name", "field required"));
  };
  let trimmed = name.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::new("name", "must not be empty"));
  }
  Ok(trimmed.to_owned())
}

/// Checks `email` against standard address syntax. The address is not
/// normalised; callers store it as given.
pub fn validate_email(email: Option<&str>) -> Result<(), ValidationError> {
  let Some(email) = email else {
    return Err(ValidationError::new("email", "field required"));
  };
  if email.len() > MAX_EMAIL_LEN {
    return Err(ValidationError::new("email", "address is too long"));
  }
  let local_len = email.find('@').unwrap_or(email.len());
  if local_len > MAX_LOCAL_PART_LEN {
    return Err(ValidationError::new("email", "local part is too long"));
  }
  if !EMAIL_RE.is_match(email) {
    return Err(ValidationError::new(
      "email",
      "value is not a valid email address",
    ));
  }
  Ok(())
}

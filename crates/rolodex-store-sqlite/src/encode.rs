//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use rolodex_core::{
  contact::Contact,
  query::{SortField, SortOrder},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Query fragments ─────────────────────────────────────────────────────────

/// `ORDER BY` body for a listing. Non-id keys tie-break on ascending id.
///
/// Only ever built from the closed [`SortField`]/[`SortOrder`] enums, so the
/// result is safe to splice into SQL.
pub fn order_clause(sort_by: SortField, order: SortOrder) -> String {
  let dir = match order {
    SortOrder::Asc => "ASC",
    SortOrder::Desc => "DESC",
  };
  match sort_by {
    SortField::Id => format!("id {dir}"),
    other => format!("{} {dir}, id ASC", other.as_str()),
  }
}

/// Wrap `text` as a `LIKE` substring pattern, escaping wildcards with `\`.
pub fn like_pattern(text: &str) -> String {
  let mut out = String::with_capacity(text.len() + 2);
  out.push('%');
  for c in text.chars() {
    if matches!(c, '%' | '_' | '\\') {
      out.push('\\');
    }
    out.push(c);
  }
  out.push('%');
  out
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching [`RawContact::from_row`].
pub const CONTACT_COLUMNS: &str = "id, name, email, phone, company, created_at";

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub id:         i64,
  pub name:       String,
  pub email:      String,
  pub phone:      Option<String>,
  pub company:    Option<String>,
  pub created_at: String,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      email:      row.get(2)?,
      phone:      row.get(3)?,
      company:    row.get(4)?,
      created_at: row.get(5)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:         self.id,
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      company:    self.company,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn id_sort_has_no_tiebreak() {
    assert_eq!(order_clause(SortField::Id, SortOrder::Desc), "id DESC");
  }

  #[test]
  fn other_sorts_tiebreak_on_ascending_id() {
    assert_eq!(
      order_clause(SortField::Company, SortOrder::Desc),
      "company DESC, id ASC"
    );
    assert_eq!(order_clause(SortField::Name, SortOrder::Asc), "name ASC, id ASC");
  }

  #[test]
  fn like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    assert_eq!(like_pattern("ali"), "%ali%");
  }

  #[test]
  fn dt_roundtrip() {
    let now = Utc::now();
    assert_eq!(decode_dt(&encode_dt(now)).unwrap(), now);
  }
}

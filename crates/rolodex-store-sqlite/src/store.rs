//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use tracing::debug;

use rolodex_core::{
  contact::{Contact, NewContact},
  query::ContactQuery,
  store::ContactStore,
};

use crate::{
  encode::{CONTACT_COLUMNS, RawContact, encode_dt, like_pattern, order_clause},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// statement runs on the connection's own thread, one at a time.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// `true` if `e` is a violation of a `UNIQUE` column constraint.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewContact) -> Result<Contact> {
    let email      = input.email.clone();
    let created_at = encode_dt(Utc::now());

    // `None` means the UNIQUE constraint on `email` rejected the row.
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        let inserted = conn.query_row(
          &format!(
            "INSERT INTO contacts (name, email, phone, company, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {CONTACT_COLUMNS}"
          ),
          rusqlite::params![
            input.name,
            input.email,
            input.phone,
            input.company,
            created_at,
          ],
          RawContact::from_row,
        );
        match inserted {
          Ok(raw) => Ok(Some(raw)),
          Err(e) if is_unique_violation(&e) => Ok(None),
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    let Some(raw) = raw else {
      debug!(%email, "rejected duplicate email");
      return Err(rolodex_core::Error::EmailTaken(email).into());
    };

    let contact = raw.into_contact()?;
    debug!(id = contact.id, "created contact");
    Ok(contact)
  }

  async fn get(&self, id: i64) -> Result<Contact> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = ?1"),
            rusqlite::params![id],
            RawContact::from_row,
          )
          .optional()?)
      })
      .await?;

    raw
      .ok_or(rolodex_core::Error::NotFound(id))?
      .into_contact()
  }

  async fn delete(&self, id: i64) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM contacts WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if removed == 0 {
      return Err(rolodex_core::Error::NotFound(id).into());
    }
    debug!(id, "deleted contact");
    Ok(())
  }

  async fn list(&self, query: &ContactQuery) -> Result<Vec<Contact>> {
    let company        = query.company.clone();
    let search_pattern = query.search.as_deref().map(like_pattern);
    let order_by       = order_clause(query.sort_by, query.order);
    let limit_val      = i64::from(query.limit);
    // Offsets beyond i64::MAX cannot match any row.
    let offset_val     = i64::try_from(query.offset).unwrap_or(i64::MAX);

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        // NULL parameters disable their filter.
        let sql = format!(
          r"SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE (?1 IS NULL OR company = ?1)
              AND (?2 IS NULL
                   OR name  LIKE ?2 ESCAPE '\'
                   OR email LIKE ?2 ESCAPE '\')
            ORDER BY {order_by}
            LIMIT ?3 OFFSET ?4"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![company, search_pattern, limit_val, offset_val],
            RawContact::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }
}

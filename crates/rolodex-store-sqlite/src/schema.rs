//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. There are no migrations; the schema
//! version is recorded in `PRAGMA user_version` for reference only.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids of deleted rows from ever being handed out again.
CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL CHECK (name <> ''),
    email       TEXT NOT NULL UNIQUE,
    phone       TEXT,
    company     TEXT,
    created_at  TEXT NOT NULL     -- RFC 3339 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS contacts_company_idx ON contacts(company);
CREATE INDEX IF NOT EXISTS contacts_name_idx    ON contacts(name);

PRAGMA user_version = 1;
";

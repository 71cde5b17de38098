//! Process wiring for the Rolodex HTTP server: configuration loading and
//! application assembly.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use rolodex_api::{InvalidPaging, Paging, api_router};
use rolodex_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// under `ROLODEX_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub store_path:    PathBuf,
  pub default_limit: u32,
  pub max_limit:     u32,
}

impl ServerConfig {
  /// Load configuration from an optional TOML file and the environment.
  /// Environment variables win over the file; both win over the defaults.
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    let defaults = Paging::default();
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8000)?
      .set_default("store_path", "contacts.db")?
      .set_default("default_limit", defaults.default_limit)?
      .set_default("max_limit", defaults.max_limit)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("ROLODEX").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  pub fn paging(&self) -> Result<Paging, InvalidPaging> {
    Paging::new(self.default_limit, self.max_limit)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// The full HTTP application: API routes plus request tracing.
pub fn app(store: SqliteStore, paging: Paging) -> Router {
  api_router(Arc::new(store), paging).layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.store_path, PathBuf::from("contacts.db"));
    assert_eq!(cfg.paging().unwrap(), Paging::default());
  }

  #[test]
  fn inverted_paging_is_rejected() {
    let cfg = ServerConfig {
      host:          "127.0.0.1".into(),
      port:          8000,
      store_path:    PathBuf::from(":memory:"),
      default_limit: 100,
      max_limit:     50,
    };
    assert!(cfg.paging().is_err());
  }

  #[test]
  fn tilde_is_expanded_only_at_start() {
    let plain = Path::new("data/contacts.db");
    assert_eq!(expand_tilde(plain), plain);
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/contacts.db")),
        PathBuf::from(home).join("contacts.db")
      );
    }
  }
}

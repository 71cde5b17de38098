//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Optional `company`, `search`, `limit`, `offset`, `sort_by`, `order` |
//! | `POST`   | `/contacts` | Body: [`CreateBody`]; returns 201 + stored contact |
//! | `GET`    | `/contacts/{id}` | 404 if not found |
//! | `DELETE` | `/contacts/{id}` | 204 on success, 404 if not found |

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use rolodex_core::{
  ValidationError,
  contact::{Contact, NewContact},
  query::{ContactQuery, SortField, SortOrder},
  store::ContactStore,
  validate::{validate_email, validate_name},
};
use serde::Deserialize;

use crate::{AppState, Paging, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// Raw query string of `GET /contacts`, checked by [`ListParams::validate`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  /// Exact, case-sensitive company match. Empty means no filter.
  pub company: Option<String>,
  /// Case-insensitive substring over name and email. Empty means no filter.
  pub search:  Option<String>,
  pub limit:   Option<i64>,
  pub offset:  Option<i64>,
  pub sort_by: Option<String>,
  pub order:   Option<String>,
}

impl ListParams {
  pub fn validate(self, paging: &Paging) -> Result<ContactQuery, ValidationError> {
    let sort_by = match self.sort_by.as_deref() {
      None => SortField::default(),
      Some(s) => SortField::parse(s).ok_or_else(|| {
        ValidationError::new("sort_by", "must be one of: id, name, company")
      })?,
    };
    let order = match self.order.as_deref() {
      None => SortOrder::default(),
      Some(s) => SortOrder::parse(s)
        .ok_or_else(|| ValidationError::new("order", "must be one of: asc, desc"))?,
    };

    let limit = match self.limit {
      None => paging.default_limit,
      Some(n) if n < 0 => {
        return Err(ValidationError::new("limit", "must not be negative"));
      }
      Some(0) => return Err(ValidationError::new("limit", "must be at least 1")),
      Some(n) if n > i64::from(paging.max_limit) => {
        return Err(ValidationError::new(
          "limit",
          format!("must be at most {}", paging.max_limit),
        ));
      }
      // Bounded by `max_limit` above.
      Some(n) => n as u32,
    };

    let offset = match self.offset {
      None => 0,
      Some(n) => u64::try_from(n)
        .map_err(|_| ValidationError::new("offset", "must not be negative"))?,
    };

    Ok(ContactQuery {
      company: self.company.filter(|c| !c.is_empty()),
      search: self.search.filter(|s| !s.is_empty()),
      sort_by,
      order,
      limit,
      offset,
    })
  }
}

/// `GET /contacts[?company=...][&search=...][&limit=...][&offset=...][&sort_by=...][&order=...]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore + 'static,
{
  let Query(params) =
    params.map_err(|r| ValidationError::new("query", r.body_text()))?;
  let query = params.validate(&state.paging)?;

  let contacts = state
    .store
    .list(&query)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(contacts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /contacts`.
///
/// Required fields are optional here so that their absence surfaces as a
/// [`ValidationError`] rather than a deserialisation failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBody {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub phone:   Option<String>,
  pub company: Option<String>,
}

impl CreateBody {
  pub fn validate(self) -> Result<NewContact, ValidationError> {
    let name = validate_name(self.name.as_deref())?;
    validate_email(self.email.as_deref())?;
    Ok(NewContact {
      name,
      // Checked as present by `validate_email`.
      email: self.email.unwrap_or_default(),
      phone: self.phone.filter(|p| !p.is_empty()),
      company: self.company.filter(|c| !c.is_empty()),
    })
  }
}

/// `POST /contacts` — returns 201 + the stored [`Contact`].
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore + 'static,
{
  let Json(body) = body.map_err(|r| ValidationError::new("body", r.body_text()))?;
  let input = body.validate()?;

  let contact = state
    .store
    .create(input)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

fn contact_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ValidationError> {
  id.map(|Path(id)| id)
    .map_err(|r| ValidationError::new("id", r.body_text()))
}

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore + 'static,
{
  let id = contact_id(id)?;
  let contact = state.store.get(id).await.map_err(ApiError::from_store)?;
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}` — 204 with an empty body.
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore + 'static,
{
  let id = contact_id(id)?;
  state.store.delete(id).await.map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

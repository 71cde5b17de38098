//! Listing parameters for [`ContactStore::list`](crate::store::ContactStore::list).

/// Column a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
  #[default]
  Id,
  Name,
  Company,
}

impl SortField {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "id" => Some(Self::Id),
      "name" => Some(Self::Name),
      "company" => Some(Self::Company),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Id => "id",
      Self::Name => "name",
      Self::Company => "company",
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
  #[default]
  Asc,
  Desc,
}

impl SortOrder {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "asc" => Some(Self::Asc),
      "desc" => Some(Self::Desc),
      _ => None,
    }
  }
}

/// A filtered, sorted, paginated listing request.
///
/// Filtering and sorting are applied before `offset`/`limit`. Rows that tie
/// on `sort_by` are ordered by ascending `id`, so pages are stable while the
/// underlying data is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
  /// Exact, case-sensitive match on `company`.
  pub company: Option<String>,
  /// Case-insensitive substring match on `name` or `email`.
  pub search:  Option<String>,
  pub sort_by: SortField,
  pub order:   SortOrder,
  pub limit:   u32,
  pub offset:  u64,
}

impl ContactQuery {
  /// An unfiltered query over the first `limit` contacts by ascending id.
  pub fn first(limit: u32) -> Self {
    Self {
      company: None,
      search:  None,
      sort_by: SortField::default(),
      order:   SortOrder::default(),
      limit,
      offset:  0,
    }
  }
}

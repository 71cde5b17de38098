//! Integration tests for `SqliteStore` against an in-memory database.

use rolodex_core::{
  contact::NewContact,
  query::{ContactQuery, SortField, SortOrder},
  store::{ContactStore, StoreFailure},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn is_not_found(err: &Error) -> bool {
  matches!(err.outcome(), Some(rolodex_core::Error::NotFound(_)))
}

fn is_email_taken(err: &Error) -> bool {
  matches!(err.outcome(), Some(rolodex_core::Error::EmailTaken(_)))
}

/// Seed a fixed set of contacts with repeated companies and names.
async fn seeded() -> SqliteStore {
  let s = store().await;
  for (name, email, company) in [
    ("Carol", "carol@acme.com", Some("Acme")),
    ("Alice", "alice@globex.com", Some("Globex")),
    ("Bob", "bob@acme.com", Some("Acme")),
    ("Alice", "alice2@acme.com", Some("Acme")),
    ("Dave", "dave@example.com", None),
    ("Eve", "eve@acme.com", Some("acme")),
  ] {
    let mut input = NewContact::new(name, email);
    input.company = company.map(str::to_owned);
    s.create(input).await.unwrap();
  }
  s
}

fn ids(contacts: &[rolodex_core::contact::Contact]) -> Vec<i64> {
  contacts.iter().map(|c| c.id).collect()
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get() {
  let s = store().await;

  let created = s
    .create(
      NewContact::new("Alice", "alice@test.com")
        .with_company("Wonderland")
        .with_phone("+1 555 0100"),
    )
    .await
    .unwrap();
  assert_eq!(created.id, 1);
  assert_eq!(created.company.as_deref(), Some("Wonderland"));

  let fetched = s.get(created.id).await.unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn ids_increase_monotonically() {
  let s = store().await;
  let a = s.create(NewContact::new("A", "a@test.com")).await.unwrap();
  let b = s.create(NewContact::new("B", "b@test.com")).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn get_missing_is_not_found() {
  let s = store().await;
  let err = s.get(42).await.unwrap_err();
  assert!(is_not_found(&err), "{err}");
}

#[tokio::test]
async fn email_is_stored_as_given() {
  let s = store().await;
  let c = s
    .create(NewContact::new("Alice", "Alice@Test.com"))
    .await
    .unwrap();
  assert_eq!(s.get(c.id).await.unwrap().email, "Alice@Test.com");
}

// ─── Uniqueness ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn duplicate_email_conflicts() {
  let s = store().await;
  s.create(NewContact::new("Alice", "alice@test.com"))
    .await
    .unwrap();

  let err = s
    .create(NewContact::new("Someone Else", "alice@test.com").with_company("Other"))
    .await
    .unwrap_err();
  assert!(is_email_taken(&err), "{err}");

  let all = s.list(&ContactQuery::first(100)).await.unwrap();
  assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn email_uniqueness_is_case_sensitive() {
  let s = store().await;
  s.create(NewContact::new("Alice", "alice@test.com"))
    .await
    .unwrap();
  s.create(NewContact::new("Alice", "ALICE@test.com"))
    .await
    .unwrap();
}

#[tokio::test]
async fn concurrent_duplicate_creates_admit_exactly_one() {
  let s = store().await;
  let (a, b) = tokio::join!(
    s.create(NewContact::new("A", "same@test.com")),
    s.create(NewContact::new("B", "same@test.com")),
  );

  let results = [a, b];
  let ok = results.iter().filter(|r| r.is_ok()).count();
  let taken = results
    .iter()
    .filter(|r| matches!(r, Err(e) if is_email_taken(e)))
    .count();
  assert_eq!((ok, taken), (1, 1));
}

#[tokio::test]
async fn email_is_reusable_after_delete() {
  let s = store().await;
  let c = s.create(NewContact::new("A", "a@test.com")).await.unwrap();
  s.delete(c.id).await.unwrap();
  s.create(NewContact::new("A", "a@test.com")).await.unwrap();
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_and_delete_are_not_found() {
  let s = store().await;
  let c = s.create(NewContact::new("A", "a@test.com")).await.unwrap();

  s.delete(c.id).await.unwrap();

  assert!(is_not_found(&s.get(c.id).await.unwrap_err()));
  assert!(is_not_found(&s.delete(c.id).await.unwrap_err()));
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
  let s = store().await;
  s.create(NewContact::new("A", "a@test.com")).await.unwrap();
  let b = s.create(NewContact::new("B", "b@test.com")).await.unwrap();
  s.delete(b.id).await.unwrap();

  let c = s.create(NewContact::new("C", "c@test.com")).await.unwrap();
  assert!(c.id > b.id);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_defaults_to_id_ascending() {
  let s = seeded().await;
  let all = s.list(&ContactQuery::first(100)).await.unwrap();
  assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn company_filter_is_exact_and_case_sensitive() {
  let s = seeded().await;
  let mut q = ContactQuery::first(100);
  q.company = Some("Acme".into());

  let acme = s.list(&q).await.unwrap();
  assert_eq!(ids(&acme), vec![1, 3, 4]);
  assert!(acme.iter().all(|c| c.company.as_deref() == Some("Acme")));
}

#[tokio::test]
async fn company_filter_ignores_unrelated_insertion_order() {
  let a = store().await;
  let b = store().await;
  // Same Acme contacts, unrelated contacts interleaved differently.
  a.create(NewContact::new("X", "x@test.com").with_company("Acme")).await.unwrap();
  a.create(NewContact::new("Noise", "n1@test.com")).await.unwrap();
  a.create(NewContact::new("Y", "y@test.com").with_company("Acme")).await.unwrap();
  b.create(NewContact::new("Noise", "n1@test.com")).await.unwrap();
  b.create(NewContact::new("X", "x@test.com").with_company("Acme")).await.unwrap();
  b.create(NewContact::new("Y", "y@test.com").with_company("Acme")).await.unwrap();

  let mut q = ContactQuery::first(100);
  q.company = Some("Acme".into());
  q.sort_by = SortField::Name;

  let names = |cs: Vec<rolodex_core::contact::Contact>| {
    cs.into_iter().map(|c| c.email).collect::<Vec<_>>()
  };
  assert_eq!(names(a.list(&q).await.unwrap()), names(b.list(&q).await.unwrap()));
}

#[tokio::test]
async fn name_sort_breaks_ties_by_id() {
  let s = seeded().await;
  let mut q = ContactQuery::first(100);
  q.sort_by = SortField::Name;

  let asc = s.list(&q).await.unwrap();
  assert_eq!(ids(&asc), vec![2, 4, 3, 1, 5, 6]);

  q.order = SortOrder::Desc;
  let desc = s.list(&q).await.unwrap();
  // Alices (2, 4) still tie-break ascending.
  assert_eq!(ids(&desc), vec![6, 5, 1, 3, 2, 4]);
}

#[tokio::test]
async fn company_sort_places_nulls_first_ascending() {
  let s = seeded().await;
  let mut q = ContactQuery::first(100);
  q.sort_by = SortField::Company;

  let asc = s.list(&q).await.unwrap();
  assert_eq!(ids(&asc), vec![5, 1, 3, 4, 2, 6]);

  q.order = SortOrder::Desc;
  let desc = s.list(&q).await.unwrap();
  assert_eq!(ids(&desc), vec![6, 2, 1, 3, 4, 5]);
}

#[tokio::test]
async fn id_sort_descending() {
  let s = seeded().await;
  let mut q = ContactQuery::first(100);
  q.order = SortOrder::Desc;
  assert_eq!(ids(&s.list(&q).await.unwrap()), vec![6, 5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn pages_concatenate_to_full_listing() {
  let s = seeded().await;
  for sort_by in [SortField::Id, SortField::Name, SortField::Company] {
    for order in [SortOrder::Asc, SortOrder::Desc] {
      let mut full_q = ContactQuery::first(100);
      full_q.sort_by = sort_by;
      full_q.order = order;
      let full = ids(&s.list(&full_q).await.unwrap());

      for limit in 1..=4 {
        let mut paged = Vec::new();
        let mut q = full_q.clone();
        q.limit = limit;
        loop {
          let page = s.list(&q).await.unwrap();
          if page.is_empty() {
            break;
          }
          paged.extend(ids(&page));
          q.offset += u64::from(limit);
        }
        assert_eq!(paged, full, "{sort_by:?} {order:?} limit={limit}");
      }
    }
  }
}

#[tokio::test]
async fn filter_applies_before_pagination() {
  let s = seeded().await;
  let mut q = ContactQuery::first(2);
  q.company = Some("Acme".into());
  q.offset = 1;
  assert_eq!(ids(&s.list(&q).await.unwrap()), vec![3, 4]);
}

#[tokio::test]
async fn offset_past_end_is_empty() {
  let s = seeded().await;
  let mut q = ContactQuery::first(10);
  q.offset = 50;
  assert!(s.list(&q).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_matches_name_or_email_case_insensitively() {
  let s = seeded().await;
  let mut q = ContactQuery::first(100);

  q.search = Some("ALICE".into());
  assert_eq!(ids(&s.list(&q).await.unwrap()), vec![2, 4]);

  q.search = Some("globex".into());
  assert_eq!(ids(&s.list(&q).await.unwrap()), vec![2]);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
  let s = store().await;
  s.create(NewContact::new("100% Real", "real@test.com")).await.unwrap();
  s.create(NewContact::new("1000 Fake", "fake@test.com")).await.unwrap();
  s.create(NewContact::new("a_b", "ab@test.com")).await.unwrap();

  let mut q = ContactQuery::first(100);
  q.search = Some("0%".into());
  assert_eq!(ids(&s.list(&q).await.unwrap()), vec![1]);

  q.search = Some("_".into());
  assert_eq!(ids(&s.list(&q).await.unwrap()), vec![3]);
}

#[tokio::test]
async fn search_and_company_combine() {
  let s = seeded().await;
  let mut q = ContactQuery::first(100);
  q.company = Some("Acme".into());
  q.search = Some("alice".into());
  assert_eq!(ids(&s.list(&q).await.unwrap()), vec![4]);
}

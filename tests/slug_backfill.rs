// tests/slug_backfill.rs
use shelf::domain::slug::{EntityKind, SlugBackfill, SlugRepository};
use shelf::infrastructure::util::DefaultSlugGenerator;
use std::sync::Arc;

mod support;

use support::{FailingAssign, InMemoryCatalog, fixed_now, mocks::time::minutes_after};

fn backfill_over(repo: Arc<dyn SlugRepository>) -> SlugBackfill {
    SlugBackfill::new(repo, Arc::new(DefaultSlugGenerator))
}

#[tokio::test]
async fn identical_legacy_titles_get_ascending_suffixes() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let ids: Vec<_> = (0..3)
        .map(|minute| catalog.seed_legacy(EntityKind::Movie, "A", minutes_after(minute)))
        .collect();

    let report = backfill_over(catalog.clone())
        .run_kind(EntityKind::Movie)
        .await
        .unwrap();

    assert!(report.is_clean());
    let slugs: Vec<_> = ids
        .iter()
        .map(|id| catalog.slug_of(EntityKind::Movie, *id).unwrap())
        .collect();
    assert_eq!(slugs, ["a", "a-1", "a-2"]);
}

#[tokio::test]
async fn rows_are_processed_in_creation_order() {
    let catalog = Arc::new(InMemoryCatalog::new());
    // Inserted out of order: the older row must still win the bare slug.
    let newer = catalog.seed_legacy(EntityKind::Book, "Emma", minutes_after(10));
    let older = catalog.seed_legacy(EntityKind::Book, "Emma", minutes_after(1));

    backfill_over(catalog.clone())
        .run_kind(EntityKind::Book)
        .await
        .unwrap();

    assert_eq!(catalog.slug_of(EntityKind::Book, older).as_deref(), Some("emma"));
    assert_eq!(catalog.slug_of(EntityKind::Book, newer).as_deref(), Some("emma-1"));
}

#[tokio::test]
async fn existing_slugs_are_respected() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.seed_slugged(EntityKind::Trip, "Iceland", "iceland", fixed_now());
    let legacy = catalog.seed_legacy(EntityKind::Trip, "Iceland", minutes_after(1));

    let report = backfill_over(catalog.clone())
        .run_kind(EntityKind::Trip)
        .await
        .unwrap();

    assert_eq!(report.assigned.len(), 1);
    assert_eq!(
        catalog.slug_of(EntityKind::Trip, legacy).as_deref(),
        Some("iceland-1")
    );
}

#[tokio::test]
async fn failed_row_is_reported_and_does_not_reserve_its_slug() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let first = catalog.seed_legacy(EntityKind::Restaurant, "Noma", minutes_after(0));
    let second = catalog.seed_legacy(EntityKind::Restaurant, "Noma", minutes_after(1));
    let third = catalog.seed_legacy(EntityKind::Restaurant, "Geranium", minutes_after(2));

    let repo = Arc::new(FailingAssign::new(catalog.clone(), [first]));
    let report = backfill_over(repo)
        .run_kind(EntityKind::Restaurant)
        .await
        .unwrap();

    assert!(!report.is_clean());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, first);
    assert_eq!(catalog.slug_of(EntityKind::Restaurant, first), None);
    // The failed write never stored `noma`, so the next row can take it.
    assert_eq!(
        catalog.slug_of(EntityKind::Restaurant, second).as_deref(),
        Some("noma")
    );
    assert_eq!(
        catalog.slug_of(EntityKind::Restaurant, third).as_deref(),
        Some("geranium")
    );
}

#[tokio::test]
async fn unsluggable_legacy_title_falls_back_to_kind_and_id() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let id = catalog.seed_legacy(EntityKind::Movie, "???", fixed_now());

    backfill_over(catalog.clone())
        .run_kind(EntityKind::Movie)
        .await
        .unwrap();

    assert_eq!(
        catalog.slug_of(EntityKind::Movie, id),
        Some(format!("movie-{id}"))
    );
}

#[tokio::test]
async fn run_all_covers_every_kind_independently() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let movie = catalog.seed_legacy(EntityKind::Movie, "Shared", fixed_now());
    let book = catalog.seed_legacy(EntityKind::Book, "Shared", fixed_now());
    let trip = catalog.seed_legacy(EntityKind::Trip, "Shared", fixed_now());
    let restaurant = catalog.seed_legacy(EntityKind::Restaurant, "Shared", fixed_now());

    let reports = backfill_over(catalog.clone()).run_all().await;

    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.as_ref().is_ok_and(|r| r.is_clean())));
    for (kind, id) in [
        (EntityKind::Movie, movie),
        (EntityKind::Book, book),
        (EntityKind::Trip, trip),
        (EntityKind::Restaurant, restaurant),
    ] {
        assert_eq!(catalog.slug_of(kind, id).as_deref(), Some("shared"));
    }
}

#[tokio::test]
async fn second_run_is_a_no_op() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.seed_legacy(EntityKind::Movie, "Solaris", fixed_now());
    let backfill = backfill_over(catalog.clone());

    let first = backfill.run_kind(EntityKind::Movie).await.unwrap();
    let second = backfill.run_kind(EntityKind::Movie).await.unwrap();

    assert_eq!(first.assigned.len(), 1);
    assert!(second.assigned.is_empty());
    assert!(second.is_clean());
}

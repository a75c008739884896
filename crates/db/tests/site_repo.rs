//! Integration tests for the `sites` table.
//!
//! Exercises the repository and the PostgreSQL-backed catalog against a real
//! database:
//! - Insert defaults (pending, generated id, `added_at`)
//! - Approved-only listing ordered newest first
//! - Filtered counting and offset lookup in sampling order
//! - Catalog operations end to end (submit, approve via SQL, list, sample)

use std::sync::Arc;

use assert_matches::assert_matches;
use randomweb_core::error::CoreError;
use randomweb_core::pagination::PageRequest;
use randomweb_core::sampling::SiteFilter;
use randomweb_core::submission::{GenresInput, SiteSubmission, YearInput};
use randomweb_core::types::{new_site_id, SiteId};
use randomweb_db::models::site::{CategoryCount, CreateSite};
use randomweb_db::repositories::SiteRepo;
use randomweb_db::{Catalog, PgCatalogStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_site(title: &str, category: &str, year: i32, is_approved: bool) -> CreateSite {
    CreateSite {
        url: format!("https://{}.test", title.to_lowercase()),
        title: title.to_string(),
        category: category.to_string(),
        genres: vec!["retro".to_string()],
        year,
        description: format!("{title} description"),
        is_approved,
    }
}

/// Approve a site the way a moderator does: directly in the database.
async fn approve(pool: &PgPool, id: SiteId) {
    sqlx::query("UPDATE sites SET is_approved = true WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

/// Pin `added_at` so ordering assertions do not depend on insert timing.
async fn set_added_at(pool: &PgPool, id: SiteId, rfc3339: &str) {
    let added_at = chrono::DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&chrono::Utc);
    sqlx::query("UPDATE sites SET added_at = $2 WHERE id = $1")
        .bind(id)
        .bind(added_at)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Test: insert defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let site = SiteRepo::create(&pool, &new_site("Alpha", "fun", 2020, false))
        .await
        .unwrap();
    assert_eq!(site.title, "Alpha");
    assert_eq!(site.genres, vec!["retro"]);
    assert!(!site.is_approved);

    let found = SiteRepo::find_by_id(&pool, site.id).await.unwrap().unwrap();
    assert_eq!(found, site);

    assert!(SiteRepo::find_by_id(&pool, new_site_id())
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_approved_newest_first(pool: PgPool) {
    let old = SiteRepo::create(&pool, &new_site("Old", "fun", 2000, true))
        .await
        .unwrap();
    let new = SiteRepo::create(&pool, &new_site("New", "fun", 2000, true))
        .await
        .unwrap();
    let pending = SiteRepo::create(&pool, &new_site("Pending", "fun", 2000, false))
        .await
        .unwrap();
    set_added_at(&pool, old.id, "2024-01-01T00:00:00Z").await;
    set_added_at(&pool, new.id, "2025-01-01T00:00:00Z").await;
    set_added_at(&pool, pending.id, "2026-01-01T00:00:00Z").await;

    let sites = SiteRepo::list_approved(&pool, 20, 0).await.unwrap();
    let titles: Vec<_> = sites.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Old"]);

    let second_page = SiteRepo::list_approved(&pool, 1, 1).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].title, "Old");

    assert!(SiteRepo::list_approved(&pool, 20, 40).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: filtered counting and offset lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_and_offset_with_filters(pool: PgPool) {
    let a = SiteRepo::create(&pool, &new_site("A", "fun", 2001, true))
        .await
        .unwrap();
    SiteRepo::create(&pool, &new_site("B", "art", 2001, true))
        .await
        .unwrap();
    let c = SiteRepo::create(&pool, &new_site("C", "fun", 2005, true))
        .await
        .unwrap();
    SiteRepo::create(&pool, &new_site("D", "fun", 2001, false))
        .await
        .unwrap();
    set_added_at(&pool, a.id, "2024-01-01T00:00:00Z").await;
    set_added_at(&pool, c.id, "2025-01-01T00:00:00Z").await;

    let all = SiteFilter::default();
    let fun = SiteFilter::new(Some("fun".into()), None);
    let fun_2005 = SiteFilter::new(Some("fun".into()), Some(2005));
    let y1901 = SiteFilter::new(None, Some(1901));

    assert_eq!(SiteRepo::count_approved(&pool, &all).await.unwrap(), 3);
    assert_eq!(SiteRepo::count_approved(&pool, &fun).await.unwrap(), 2);
    assert_eq!(SiteRepo::count_approved(&pool, &fun_2005).await.unwrap(), 1);
    assert_eq!(SiteRepo::count_approved(&pool, &y1901).await.unwrap(), 0);

    let first = SiteRepo::find_approved_at_offset(&pool, &fun, 0)
        .await
        .unwrap()
        .unwrap();
    let second = SiteRepo::find_approved_at_offset(&pool, &fun, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.id, a.id);
    assert_eq!(second.id, c.id);
    assert!(SiteRepo::find_approved_at_offset(&pool, &fun, 2)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: seed support
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_counts_and_delete_all(pool: PgPool) {
    for (title, category, approved) in [
        ("A", "fun", true),
        ("B", "fun", true),
        ("C", "art", true),
        ("D", "zen", false),
    ] {
        SiteRepo::create(&pool, &new_site(title, category, 2000, approved))
            .await
            .unwrap();
    }

    let counts = SiteRepo::category_counts(&pool).await.unwrap();
    assert_eq!(
        counts,
        vec![
            CategoryCount { category: "fun".into(), count: 2 },
            CategoryCount { category: "art".into(), count: 1 },
        ]
    );

    assert_eq!(SiteRepo::delete_all(&pool).await.unwrap(), 4);
    assert!(SiteRepo::list_approved(&pool, 20, 0).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: catalog scenario against PostgreSQL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_submit_approve_list_sample(pool: PgPool) {
    let catalog = Catalog::new(Arc::new(PgCatalogStore::new(pool.clone())));

    let submission = SiteSubmission {
        url: Some("https://x.test".into()),
        title: Some("X".into()),
        category: Some("fun".into()),
        genres: Some(GenresInput::Text("games, puzzles".into())),
        year: Some(YearInput::Int(2020)),
        description: Some("d".into()),
    };
    let created = catalog.submit(submission).await.unwrap();
    assert!(!created.is_approved);
    assert_eq!(created.genres, vec!["games", "puzzles"]);

    // Pending: invisible to listing and sampling.
    let page = catalog.list_page(PageRequest::default()).await.unwrap();
    assert_eq!(page.pagination.total, 0);
    let fun = SiteFilter::new(Some("fun".into()), None);
    assert_matches!(
        catalog.random_sample(&fun).await,
        Err(CoreError::NoMatchingEntries(_))
    );

    approve(&pool, created.id).await;

    let page = catalog.list_page(PageRequest::default()).await.unwrap();
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.sites[0].id, created.id);

    let sampled = catalog.random_sample(&fun).await.unwrap();
    assert_eq!(sampled.id, created.id);

    let fetched = catalog.get_by_id(&created.id.to_string()).await.unwrap();
    assert!(fetched.is_approved);
    assert_eq!(fetched.url, created.url);
    assert_eq!(fetched.added_at, created.added_at);

    assert_matches!(
        catalog.get_by_id("507f1f77bcf86cd799439011").await,
        Err(CoreError::InvalidIdentifier(_))
    );
}

//! Bulk loading of curated websites.
//!
//! Seeded sites skip moderation: they are inserted approved. Records that
//! lack a url, title or category are skipped with a warning rather than
//! aborting the whole load.

use randomweb_core::error::CoreError;
use randomweb_core::sampling::SiteFilter;
use randomweb_core::seed::SeedRecord;
use randomweb_db::models::site::{CategoryCount, CreateSite};
use randomweb_db::CatalogStore;

/// Options for a seed run.
#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    /// Keep existing sites instead of clearing the catalog first.
    pub keep_existing: bool,
    /// Year assigned to records without a usable year.
    pub current_year: i32,
}

/// Outcome of a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub removed: u64,
    pub inserted: usize,
    pub skipped: usize,
    pub categories: Vec<CategoryCount>,
    pub total_approved: i64,
}

/// Load `records` into `store` as approved sites and gather statistics.
pub async fn seed_catalog(
    store: &dyn CatalogStore,
    records: Vec<SeedRecord>,
    options: SeedOptions,
) -> Result<SeedReport, CoreError> {
    let removed = if options.keep_existing {
        0
    } else {
        let removed = store.delete_all().await?;
        tracing::info!(removed, "Cleared existing sites");
        removed
    };

    let mut inserted = 0;
    let mut skipped = 0;
    for (index, record) in records.into_iter().enumerate() {
        match record.into_draft(options.current_year) {
            Ok(draft) => {
                store.insert(&CreateSite::approved(draft)).await?;
                inserted += 1;
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "Skipping seed record");
                skipped += 1;
            }
        }
    }
    tracing::info!(inserted, skipped, "Inserted seed records");

    let categories = store.category_counts().await?;
    let total_approved = store.count_approved(&SiteFilter::default()).await?;

    Ok(SeedReport {
        removed,
        inserted,
        skipped,
        categories,
        total_approved,
    })
}

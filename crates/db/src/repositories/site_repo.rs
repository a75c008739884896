//! Repository for the `sites` table.

use randomweb_core::sampling::SiteFilter;
use randomweb_core::types::{new_site_id, SiteId};
use sqlx::PgPool;

use crate::models::site::{CategoryCount, CreateSite, Site};

/// Column list for the `sites` table.
const COLUMNS: &str =
    "id, url, title, category, genres, year, description, is_approved, added_at";

/// Shared predicate for approved sites matching an optional category/year.
/// `$1` is the category, `$2` the year; `NULL` disables the constraint.
const APPROVED_MATCHING: &str = "is_approved = true \
    AND ($1::TEXT IS NULL OR category = $1) \
    AND ($2::INTEGER IS NULL OR year = $2)";

/// Provides insert, lookup, listing and sampling queries for sites.
pub struct SiteRepo;

impl SiteRepo {
    /// Insert a new site with a freshly allocated id. `added_at` is set by the database.
    pub async fn create(pool: &PgPool, input: &CreateSite) -> Result<Site, sqlx::Error> {
        let query = format!(
            "INSERT INTO sites \
                (id, url, title, category, genres, year, description, is_approved) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(new_site_id())
            .bind(&input.url)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.genres)
            .bind(input.year)
            .bind(&input.description)
            .bind(input.is_approved)
            .fetch_one(pool)
            .await
    }

    /// Find a site by id, regardless of approval state.
    pub async fn find_by_id(pool: &PgPool, id: SiteId) -> Result<Option<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE id = $1");
        sqlx::query_as::<_, Site>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of approved sites, newest first.
    pub async fn list_approved(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Site>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sites \
             WHERE is_approved = true \
             ORDER BY added_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count approved sites matching the filter.
    pub async fn count_approved(pool: &PgPool, filter: &SiteFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM sites WHERE {APPROVED_MATCHING}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.year)
            .fetch_one(pool)
            .await
    }

    /// The approved site at `offset` within the matching set, in sampling
    /// order (`added_at ASC, id ASC`).
    pub async fn find_approved_at_offset(
        pool: &PgPool,
        filter: &SiteFilter,
        offset: i64,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sites \
             WHERE {APPROVED_MATCHING} \
             ORDER BY added_at ASC, id ASC \
             OFFSET $3 LIMIT 1"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.year)
            .bind(offset)
            .fetch_optional(pool)
            .await
    }

    /// Approved-site counts per category, largest first.
    pub async fn category_counts(pool: &PgPool) -> Result<Vec<CategoryCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryCount>(
            "SELECT category, COUNT(*) AS count FROM sites \
             WHERE is_approved = true \
             GROUP BY category \
             ORDER BY count DESC, category ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Remove every site. Returns the number of rows deleted.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sites").execute(pool).await?;
        Ok(result.rows_affected())
    }
}

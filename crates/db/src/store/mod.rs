//! Storage backends for the catalog.
//!
//! [`CatalogStore`] is the seam between the catalog operations and where
//! sites actually live. The server runs on [`PgCatalogStore`]; tests and
//! local experiments can swap in [`MemoryCatalogStore`].

mod memory;
mod postgres;

use async_trait::async_trait;
use randomweb_core::error::CoreError;
use randomweb_core::pagination::PageRequest;
use randomweb_core::sampling::SiteFilter;
use randomweb_core::types::SiteId;

use crate::models::site::{CategoryCount, CreateSite, Site};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Primitive reads and writes a catalog backend must provide.
///
/// Failures of the backend itself are reported as [`CoreError::Storage`].
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Persist a new site, assigning its id and `added_at`.
    async fn insert(&self, input: &CreateSite) -> Result<Site, CoreError>;

    /// Look up a site by id, approved or not.
    async fn find_by_id(&self, id: SiteId) -> Result<Option<Site>, CoreError>;

    /// One page of approved sites ordered by `added_at` descending, plus the
    /// total number of approved sites.
    async fn list_approved(&self, page: PageRequest) -> Result<(Vec<Site>, i64), CoreError>;

    /// Number of approved sites matching `filter`.
    async fn count_approved(&self, filter: &SiteFilter) -> Result<i64, CoreError>;

    /// The approved site at `offset` among those matching `filter`, ordered
    /// by `added_at` ascending then id ascending.
    async fn find_approved_at_offset(
        &self,
        filter: &SiteFilter,
        offset: i64,
    ) -> Result<Option<Site>, CoreError>;

    /// Approved-site counts per category, largest first.
    async fn category_counts(&self) -> Result<Vec<CategoryCount>, CoreError>;

    /// Remove every site, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, CoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), CoreError>;
}

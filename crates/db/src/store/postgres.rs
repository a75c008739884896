use async_trait::async_trait;
use randomweb_core::error::CoreError;
use randomweb_core::pagination::PageRequest;
use randomweb_core::sampling::SiteFilter;
use randomweb_core::types::SiteId;

use super::CatalogStore;
use crate::models::site::{CategoryCount, CreateSite, Site};
use crate::repositories::SiteRepo;
use crate::DbPool;

/// [`CatalogStore`] backed by the `sites` table in PostgreSQL.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn insert(&self, input: &CreateSite) -> Result<Site, CoreError> {
        SiteRepo::create(&self.pool, input)
            .await
            .map_err(storage_error)
    }

    async fn find_by_id(&self, id: SiteId) -> Result<Option<Site>, CoreError> {
        SiteRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)
    }

    async fn list_approved(&self, page: PageRequest) -> Result<(Vec<Site>, i64), CoreError> {
        let filter = SiteFilter::default();
        let (sites, total) = tokio::try_join!(
            SiteRepo::list_approved(&self.pool, page.limit, page.offset()),
            SiteRepo::count_approved(&self.pool, &filter),
        )
        .map_err(storage_error)?;
        Ok((sites, total))
    }

    async fn count_approved(&self, filter: &SiteFilter) -> Result<i64, CoreError> {
        SiteRepo::count_approved(&self.pool, filter)
            .await
            .map_err(storage_error)
    }

    async fn find_approved_at_offset(
        &self,
        filter: &SiteFilter,
        offset: i64,
    ) -> Result<Option<Site>, CoreError> {
        SiteRepo::find_approved_at_offset(&self.pool, filter, offset)
            .await
            .map_err(storage_error)
    }

    async fn category_counts(&self) -> Result<Vec<CategoryCount>, CoreError> {
        SiteRepo::category_counts(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn delete_all(&self) -> Result<u64, CoreError> {
        SiteRepo::delete_all(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}

//! The catalog operations: submit, get-by-id, list-page, random-sample.
//!
//! [`Catalog`] owns a shared [`CatalogStore`] handle and layers the
//! validation, approval visibility and sampling rules on top of it. It is
//! cheap to clone and is constructed once at startup.

use std::sync::Arc;

use randomweb_core::error::CoreError;
use randomweb_core::pagination::{PageRequest, PaginationInfo};
use randomweb_core::sampling::{random_offset, SiteFilter};
use randomweb_core::submission::SiteSubmission;
use randomweb_core::types::parse_site_id;
use serde::Serialize;

use crate::models::site::{CreateSite, Site};
use crate::store::CatalogStore;

/// A page of approved sites with its pagination block.
#[derive(Debug, Clone, Serialize)]
pub struct SitePage {
    pub sites: Vec<Site>,
    pub pagination: PaginationInfo,
}

#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn CatalogStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health checks and bulk tooling.
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Validate a submission and persist it as pending.
    pub async fn submit(&self, submission: SiteSubmission) -> Result<Site, CoreError> {
        let draft = submission.validate()?;
        let site = self.store.insert(&CreateSite::pending(draft)).await?;
        tracing::info!(site_id = %site.id, category = %site.category, "Site submitted for review");
        Ok(site)
    }

    /// Fetch a site by its string id, approved or not.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Site, CoreError> {
        let id = parse_site_id(raw_id)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Site", id })
    }

    /// One page of approved sites, newest first.
    ///
    /// Pages past the end yield an empty list, not an error.
    pub async fn list_page(&self, page: PageRequest) -> Result<SitePage, CoreError> {
        let (sites, total) = self.store.list_approved(page).await?;
        tracing::debug!(page = page.page, limit = page.limit, total, "Listed sites");
        Ok(SitePage {
            sites,
            pagination: PaginationInfo::new(page, total),
        })
    }

    /// Pick one approved site matching `filter`, uniformly at random.
    ///
    /// Count and fetch are separate reads; if the matching set shrinks in
    /// between and the drawn offset falls off the end, this reports
    /// [`CoreError::NoMatchingEntries`].
    pub async fn random_sample(&self, filter: &SiteFilter) -> Result<Site, CoreError> {
        let count = self.store.count_approved(filter).await?;
        let Some(offset) = random_offset(count) else {
            return Err(CoreError::NoMatchingEntries(filter.clone()));
        };

        let site = self.store.find_approved_at_offset(filter, offset).await?;
        match site {
            Some(site) => {
                tracing::debug!(site_id = %site.id, count, offset, %filter, "Sampled site");
                Ok(site)
            }
            None => {
                tracing::warn!(count, offset, %filter, "Matching set shrank during sampling");
                Err(CoreError::NoMatchingEntries(filter.clone()))
            }
        }
    }
}

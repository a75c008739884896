use std::cmp::Reverse;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, SubsecRound, Utc};
use randomweb_core::error::CoreError;
use randomweb_core::pagination::PageRequest;
use randomweb_core::sampling::SiteFilter;
use randomweb_core::types::{new_site_id, SiteId, Timestamp};
use tokio::sync::RwLock;

use super::CatalogStore;
use crate::models::site::{CategoryCount, CreateSite, Site};

/// [`CatalogStore`] holding sites in process memory.
///
/// Timestamps are truncated to microseconds like PostgreSQL's `TIMESTAMPTZ`
/// and are strictly increasing in insertion order, so orderings are fully
/// deterministic.
#[derive(Default)]
pub struct MemoryCatalogStore {
    sites: RwLock<Vec<Site>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a site approved, as a moderator would. Returns `false` if the id
    /// is unknown.
    ///
    /// Not part of [`CatalogStore`]: the service itself never approves sites.
    pub async fn approve(&self, id: SiteId) -> bool {
        let mut sites = self.sites.write().await;
        match sites.iter_mut().find(|s| s.id == id) {
            Some(site) => {
                site.is_approved = true;
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sites.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sites.read().await.is_empty()
    }

    fn next_timestamp(sites: &[Site]) -> Timestamp {
        let now = Utc::now().trunc_subsecs(6);
        match sites.iter().map(|s| s.added_at).max() {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        }
    }
}

fn to_index(n: i64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn insert(&self, input: &CreateSite) -> Result<Site, CoreError> {
        let mut sites = self.sites.write().await;
        let site = Site {
            id: new_site_id(),
            url: input.url.clone(),
            title: input.title.clone(),
            category: input.category.clone(),
            genres: input.genres.clone(),
            year: input.year,
            description: input.description.clone(),
            is_approved: input.is_approved,
            added_at: Self::next_timestamp(&sites),
        };
        sites.push(site.clone());
        Ok(site)
    }

    async fn find_by_id(&self, id: SiteId) -> Result<Option<Site>, CoreError> {
        let sites = self.sites.read().await;
        Ok(sites.iter().find(|s| s.id == id).cloned())
    }

    async fn list_approved(&self, page: PageRequest) -> Result<(Vec<Site>, i64), CoreError> {
        let sites = self.sites.read().await;
        let mut approved: Vec<&Site> = sites.iter().filter(|s| s.is_approved).collect();
        approved.sort_by_key(|s| Reverse((s.added_at, s.id)));

        let total = approved.len() as i64;
        let slice = approved
            .into_iter()
            .skip(to_index(page.offset()))
            .take(to_index(page.limit))
            .cloned()
            .collect();
        Ok((slice, total))
    }

    async fn count_approved(&self, filter: &SiteFilter) -> Result<i64, CoreError> {
        let sites = self.sites.read().await;
        let count = sites
            .iter()
            .filter(|s| s.is_approved && filter.matches(&s.category, s.year))
            .count();
        Ok(count as i64)
    }

    async fn find_approved_at_offset(
        &self,
        filter: &SiteFilter,
        offset: i64,
    ) -> Result<Option<Site>, CoreError> {
        let sites = self.sites.read().await;
        let mut matching: Vec<&Site> = sites
            .iter()
            .filter(|s| s.is_approved && filter.matches(&s.category, s.year))
            .collect();
        matching.sort_by_key(|s| (s.added_at, s.id));
        Ok(matching.get(to_index(offset)).map(|s| (*s).clone()))
    }

    async fn category_counts(&self) -> Result<Vec<CategoryCount>, CoreError> {
        let sites = self.sites.read().await;
        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for site in sites.iter().filter(|s| s.is_approved) {
            *counts.entry(site.category.as_str()).or_default() += 1;
        }

        let mut counts: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();
        // Stable sort keeps categories alphabetical within equal counts.
        counts.sort_by_key(|c| Reverse(c.count));
        Ok(counts)
    }

    async fn delete_all(&self) -> Result<u64, CoreError> {
        let mut sites = self.sites.write().await;
        let removed = sites.len() as u64;
        sites.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_site(title: &str, category: &str, year: i32, approved: bool) -> CreateSite {
        CreateSite {
            url: format!("https://{}.test", title.to_lowercase()),
            title: title.to_string(),
            category: category.to_string(),
            genres: vec![],
            year,
            description: format!("{title} description"),
            is_approved: approved,
        }
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids_and_increasing_timestamps() {
        let store = MemoryCatalogStore::new();
        let a = store.insert(&new_site("A", "fun", 2020, false)).await.unwrap();
        let b = store.insert(&new_site("B", "fun", 2020, false)).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.added_at > a.added_at);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn approve_flips_flag_once_known() {
        let store = MemoryCatalogStore::new();
        let site = store.insert(&new_site("A", "fun", 2020, false)).await.unwrap();
        assert!(store.approve(site.id).await);
        assert!(!store.approve(new_site_id()).await);

        let found = store.find_by_id(site.id).await.unwrap().unwrap();
        assert!(found.is_approved);
    }

    #[tokio::test]
    async fn list_skips_pending_and_orders_newest_first() {
        let store = MemoryCatalogStore::new();
        let old = store.insert(&new_site("Old", "fun", 2000, true)).await.unwrap();
        store.insert(&new_site("Hidden", "fun", 2000, false)).await.unwrap();
        let new = store.insert(&new_site("New", "fun", 2000, true)).await.unwrap();

        let (sites, total) = store.list_approved(PageRequest::default()).await.unwrap();
        assert_eq!(total, 2);
        let ids: Vec<_> = sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![new.id, old.id]);
    }

    #[tokio::test]
    async fn offset_lookup_uses_oldest_first_order() {
        let store = MemoryCatalogStore::new();
        let first = store.insert(&new_site("A", "fun", 2000, true)).await.unwrap();
        store.insert(&new_site("B", "art", 2000, true)).await.unwrap();
        let third = store.insert(&new_site("C", "fun", 2000, true)).await.unwrap();

        let filter = SiteFilter::new(Some("fun".into()), None);
        assert_eq!(store.count_approved(&filter).await.unwrap(), 2);
        let at0 = store.find_approved_at_offset(&filter, 0).await.unwrap().unwrap();
        let at1 = store.find_approved_at_offset(&filter, 1).await.unwrap().unwrap();
        assert_eq!(at0.id, first.id);
        assert_eq!(at1.id, third.id);
        assert!(store.find_approved_at_offset(&filter, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn category_counts_largest_first() {
        let store = MemoryCatalogStore::new();
        store.insert(&new_site("A", "art", 2000, true)).await.unwrap();
        store.insert(&new_site("B", "fun", 2000, true)).await.unwrap();
        store.insert(&new_site("C", "fun", 2000, true)).await.unwrap();
        store.insert(&new_site("D", "zen", 2000, false)).await.unwrap();

        let counts = store.category_counts().await.unwrap();
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "fun".into(), count: 2 },
                CategoryCount { category: "art".into(), count: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn delete_all_reports_removed_rows() {
        let store = MemoryCatalogStore::new();
        store.insert(&new_site("A", "art", 2000, true)).await.unwrap();
        store.insert(&new_site("B", "art", 2000, false)).await.unwrap();
        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert!(store.is_empty().await);
    }
}

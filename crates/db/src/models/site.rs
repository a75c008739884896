//! Site entity model and DTOs.
//!
//! A site is one catalog entry describing a curated website. Entries are
//! created pending (`is_approved = false`) and become publicly visible only
//! once a moderator flips the flag outside this service.

use randomweb_core::submission::SiteDraft;
use randomweb_core::types::{SiteId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sites` table.
///
/// Serialized with camelCase keys (`isApproved`, `addedAt`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: SiteId,
    pub url: String,
    pub title: String,
    pub category: String,
    pub genres: Vec<String>,
    pub year: i32,
    pub description: String,
    pub is_approved: bool,
    pub added_at: Timestamp,
}

/// DTO for inserting a new site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSite {
    pub url: String,
    pub title: String,
    pub category: String,
    pub genres: Vec<String>,
    pub year: i32,
    pub description: String,
    pub is_approved: bool,
}

impl CreateSite {
    /// A public submission awaiting moderation.
    pub fn pending(draft: SiteDraft) -> Self {
        Self::from_draft(draft, false)
    }

    /// A curated entry loaded by the seed command.
    pub fn approved(draft: SiteDraft) -> Self {
        Self::from_draft(draft, true)
    }

    fn from_draft(draft: SiteDraft, is_approved: bool) -> Self {
        Self {
            url: draft.url,
            title: draft.title,
            category: draft.category,
            genres: draft.genres,
            year: draft.year,
            description: draft.description,
            is_approved,
        }
    }
}

/// Approved-site count for one category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

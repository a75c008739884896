use crate::error::CoreError;

/// Catalog entries are keyed by time-ordered UUIDs (v7).
pub type SiteId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh, never-reused site identifier.
pub fn new_site_id() -> SiteId {
    uuid::Uuid::now_v7()
}

/// Parse a caller-supplied identifier.
///
/// Malformed input is an [`CoreError::InvalidIdentifier`], which callers must
/// keep distinct from a well-formed id that simply does not exist.
pub fn parse_site_id(raw: &str) -> Result<SiteId, CoreError> {
    uuid::Uuid::parse_str(raw.trim())
        .map_err(|_| CoreError::InvalidIdentifier(raw.to_string()))
}

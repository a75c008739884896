use crate::sampling::SiteFilter;
use crate::types::SiteId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid site ID: {0}")]
    InvalidIdentifier(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: SiteId },

    #[error("No approved sites available for {0}")]
    NoMatchingEntries(SiteFilter),

    #[error("Storage error: {0}")]
    Storage(String),
}

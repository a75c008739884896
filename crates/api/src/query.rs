//! Query parameter types for API handlers.

use randomweb_core::pagination::PageRequest;
use randomweb_core::sampling::SiteFilter;
use serde::Deserialize;

use crate::error::AppError;

/// Page-based pagination parameters (`?page=&limit=`).
///
/// Values are clamped by [`PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(params.page, params.limit)
    }
}

/// Random-sample filter parameters (`?category=&year=`).
///
/// Both are taken as strings so that an empty value means "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct RandomParams {
    pub category: Option<String>,
    pub year: Option<String>,
}

impl TryFrom<RandomParams> for SiteFilter {
    type Error = AppError;

    fn try_from(params: RandomParams) -> Result<Self, Self::Error> {
        let year = match params.year.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid year: {raw}")))?,
            ),
        };
        Ok(SiteFilter::new(params.category, year))
    }
}

//! Lenient decoding of bulk seed files.
//!
//! Seed files are curated by hand, so the rules are looser than for public
//! submissions: genres are kept only when given as an array, a missing or
//! unparseable year falls back to the current year, and a missing
//! description becomes empty. `url`, `title` and `category` are still
//! required.

use serde::Deserialize;

use crate::error::CoreError;
use crate::submission::{SiteDraft, YearInput};

/// One record from a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedRecord {
    pub url: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub genres: Option<serde_json::Value>,
    #[serde(default)]
    pub year: Option<serde_json::Value>,
    pub description: Option<String>,
}

impl SeedRecord {
    /// Convert to a draft, using `current_year` when the record has no usable year.
    pub fn into_draft(self, current_year: i32) -> Result<SiteDraft, CoreError> {
        let url = required("url", self.url)?;
        let title = required("title", self.title)?;
        let category = required("category", self.category)?;

        let genres = match self.genres {
            Some(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| match v {
                    serde_json::Value::String(s) => Some(s.trim().to_string()),
                    _ => None,
                })
                .filter(|g| !g.is_empty())
                .collect(),
            _ => Vec::new(),
        };

        let year = self
            .year
            .and_then(|y| serde_json::from_value::<YearInput>(y).ok())
            .and_then(|y| y.to_year())
            .filter(|y| *y != 0)
            .unwrap_or(current_year);

        Ok(SiteDraft {
            url,
            title,
            category,
            genres,
            year,
            description: self.description.unwrap_or_default().trim().to_string(),
        })
    }
}

/// Parse a seed document, which must be a JSON array of records.
pub fn parse_seed_document(raw: &str) -> Result<Vec<SeedRecord>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| CoreError::Validation(format!("Seed file is not valid JSON: {e}")))?;

    let serde_json::Value::Array(items) = value else {
        return Err(CoreError::Validation(
            "Seed file must contain an array of websites".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| CoreError::Validation(format!("Seed record {i} is malformed: {e}")))
        })
        .collect()
}

fn required(field: &str, value: Option<String>) -> Result<String, CoreError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::Validation(format!("Missing required field: {field}")))
}

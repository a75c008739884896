//! Parsing and validation of user-submitted sites.
//!
//! Submissions arrive as loosely-typed JSON: `genres` may be a
//! comma-separated string or an array, and `year` may be a number or a
//! numeric string. [`SiteSubmission::validate`] normalizes all of that into
//! a [`SiteDraft`] or rejects it with [`CoreError::Validation`].

use serde::Deserialize;

use crate::error::CoreError;

/// Genres as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GenresInput {
    List(Vec<String>),
    Text(String),
}

impl GenresInput {
    /// Trimmed, non-empty genre names in their original order.
    pub fn into_genres(self) -> Vec<String> {
        match self {
            GenresInput::Text(raw) => parse_genres(&raw),
            GenresInput::List(items) => items
                .into_iter()
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }
}

/// Year as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl YearInput {
    /// Coerce to an integer year. Fractions are truncated; a string yields
    /// its leading integer (`"2004.7"` and `"2020abc"` give 2004 and 2020).
    pub fn to_year(&self) -> Option<i32> {
        match self {
            YearInput::Int(n) => i32::try_from(*n).ok(),
            YearInput::Float(f) if f.is_finite() => i32::try_from(f.trunc() as i64).ok(),
            YearInput::Float(_) => None,
            YearInput::Text(raw) => leading_integer(raw),
        }
    }
}

/// Parse the optionally signed run of digits at the start of `raw`, after
/// leading whitespace. `None` if there are no digits or the value overflows.
fn leading_integer(raw: &str) -> Option<i32> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse().ok()
}

/// Raw body of a site submission. Every field is optional at this stage so
/// that missing fields surface as validation errors, not decode errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSubmission {
    pub url: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub genres: Option<GenresInput>,
    pub year: Option<YearInput>,
    pub description: Option<String>,
}

/// A validated site, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDraft {
    pub url: String,
    pub title: String,
    pub category: String,
    pub genres: Vec<String>,
    pub year: i32,
    pub description: String,
}

impl SiteSubmission {
    /// Check required fields and normalize the submission.
    ///
    /// Text fields are trimmed and must be non-empty. A year of `0` counts as
    /// missing.
    pub fn validate(self) -> Result<SiteDraft, CoreError> {
        let url = required_text("url", self.url)?;
        let title = required_text("title", self.title)?;
        let category = required_text("category", self.category)?;

        let year = match self.year {
            None => return Err(missing("year")),
            Some(raw) => match raw.to_year() {
                Some(0) => return Err(missing("year")),
                Some(year) => year,
                None => {
                    return Err(CoreError::Validation(
                        "Field 'year' must be an integer".to_string(),
                    ))
                }
            },
        };

        let description = required_text("description", self.description)?;
        let genres = self.genres.map(GenresInput::into_genres).unwrap_or_default();

        Ok(SiteDraft {
            url,
            title,
            category,
            genres,
            year,
            description,
        })
    }
}

/// Split a comma-separated genre list, trimming segments and dropping blanks.
///
/// # Examples
///
/// ```
/// use randomweb_core::submission::parse_genres;
/// assert_eq!(parse_genres("a, b ,c"), vec!["a", "b", "c"]);
/// assert!(parse_genres("").is_empty());
/// ```
pub fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

fn required_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(missing(field));
    }
    Ok(value)
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("Missing required field: {field}"))
}

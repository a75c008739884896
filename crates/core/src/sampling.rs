//! Filters and the uniform draw behind random sampling.
//!
//! Sampling is count-then-skip: the store counts approved sites matching a
//! [`SiteFilter`], [`random_offset`] picks an index in `[0, count)`, and the
//! store returns the site at that offset in its stable sampling order
//! (`added_at ASC, id ASC`).
//!
//! The count and the fetch are separate reads, so a concurrent insert or
//! approval can shift the matching set in between. That race is accepted:
//! the result is still an approved site matching the filter, or
//! [`CoreError::NoMatchingEntries`](crate::error::CoreError) if the tail
//! vanished.

use std::fmt;

use rand::Rng;

/// Optional exact-match constraints for random sampling.
///
/// Approval is not part of the filter: only approved sites are ever sampled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteFilter {
    pub category: Option<String>,
    pub year: Option<i32>,
}

impl SiteFilter {
    /// Build a filter, treating a blank category as "no category constraint".
    ///
    /// A non-blank category is kept verbatim: matching is exact.
    pub fn new(category: Option<String>, year: Option<i32>) -> Self {
        let category = category.filter(|c| !c.trim().is_empty());
        Self { category, year }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.year.is_none()
    }

    /// Whether a site with the given category and year satisfies this filter.
    pub fn matches(&self, category: &str, year: i32) -> bool {
        self.category.as_deref().map_or(true, |c| c == category)
            && self.year.map_or(true, |y| y == year)
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.category, self.year) {
            (None, None) => write!(f, "any site"),
            (Some(c), None) => write!(f, "category={c}"),
            (None, Some(y)) => write!(f, "year={y}"),
            (Some(c), Some(y)) => write!(f, "category={c}, year={y}"),
        }
    }
}

/// Draw a uniformly distributed offset in `[0, count)` from the thread RNG.
///
/// Returns `None` when there is nothing to draw from.
pub fn random_offset(count: i64) -> Option<i64> {
    random_offset_with(&mut rand::rng(), count)
}

/// Same as [`random_offset`] with a caller-supplied RNG.
pub fn random_offset_with<R: Rng + ?Sized>(rng: &mut R, count: i64) -> Option<i64> {
    if count <= 0 {
        return None;
    }
    Some(rng.random_range(0..count))
}

//! Domain layer for the random web catalog.
//!
//! Pure types and rules with no I/O: the error taxonomy, identifier parsing,
//! submission validation, filters, pagination math, and the uniform offset
//! draw used by random sampling.

pub mod error;
pub mod pagination;
pub mod sampling;
pub mod seed;
pub mod submission;
pub mod types;

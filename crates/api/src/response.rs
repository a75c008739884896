//! Response payload types for API handlers.

use randomweb_db::models::site::Site;
use serde::Serialize;

/// Body of `POST /api/submit`: a confirmation message plus the stored site.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub site: Site,
}

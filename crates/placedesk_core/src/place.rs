use serde::{Deserialize, Serialize};

/// Backend identifier of a stored search job (an ObjectId rendered as a string).
pub type JobId = String;

/// Backend identifier of a single scraped place.
pub type PlaceId = String;

/// Summary of a previously executed search job. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub queries: Vec<String>,
    pub result_count: u64,
    pub created_at: String,
}

/// One scraped place belonging to a job.
///
/// Every descriptive field is optional on the wire; `contacted` defaults to
/// false for records stored before the flag existed. Field order here is the
/// column order of CSV exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub id: PlaceId,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Link back to the place on Google Maps; the backend calls this `url`.
    #[serde(default, rename = "url")]
    pub maps_url: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub contacted: bool,
}

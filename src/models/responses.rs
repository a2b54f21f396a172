use serde::{Deserialize, Serialize};
use crate::core::classifier::CategoryBucket;
use crate::models::domain::LocationRecord;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub records: usize,
    #[serde(rename = "loadId")]
    pub load_id: Option<uuid::Uuid>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// A loaded record together with its display bucket
#[derive(Debug, Clone, Serialize)]
pub struct ParkingEntry {
    #[serde(flatten)]
    pub record: LocationRecord,
    pub bucket: CategoryBucket,
    pub color: &'static str,
}

/// Response for the unfiltered record listing
#[derive(Debug, Clone, Serialize)]
pub struct ParkingsResponse {
    pub parkings: Vec<ParkingEntry>,
    pub total: usize,
    pub skipped: usize,
}

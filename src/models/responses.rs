use serde::{Deserialize, Serialize};

/// Response for the select endpoint
///
/// `hospital_id` is `None` and `score` is -1 when no hospital was eligible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub allocation_id: String,
    pub hospital_id: Option<String>,
    pub score: f64,
    pub distance_km: Option<f64>,
    pub evaluated: usize,
    pub eligible: usize,
}

/// One row of a ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedHospital {
    pub hospital_id: String,
    pub distance_km: f64,
    pub distance_score: f64,
    pub capacity_score: f64,
    pub specialization_score: f64,
    pub score: f64,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub allocation_id: String,
    pub ranking: Vec<RankedHospital>,
    pub evaluated: usize,
}

/// Response for the travel estimate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelEstimateResponse {
    pub distance_km: f64,
    pub traffic_factor: f64,
    pub travel_time_minutes: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

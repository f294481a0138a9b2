use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};
use crate::models::domain::{Hospital, Location, Patient};

/// Request to evaluate one patient against a hospital snapshot
///
/// Shared by the select and rank endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    #[validate(nested)]
    pub patient: Patient,
    #[serde(default)]
    pub hospitals: Vec<Hospital>,
}

impl AllocationRequest {
    /// Validate the patient and every hospital entry
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        self.hospitals.iter().try_for_each(|h| h.validate())
    }
}

/// Request for a travel-time estimate between two points
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TravelEstimateRequest {
    #[validate(nested)]
    pub from: Location,
    #[validate(nested)]
    pub to: Location,
    /// Falls back to the configured default speed
    pub speed_kph: Option<f64>,
    /// Local wall-clock hour (0-23); sampled from the clock when absent
    pub hour: Option<u32>,
    /// Uniform sample in [0, 1]; drawn from the traffic sampler when absent
    pub traffic_sample: Option<f64>,
}

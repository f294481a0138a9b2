use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::core::error::AllocationError;

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Patient urgency tier, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Severity {
    Critical,
    High,
    Moderate,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Moderate,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Moderate => "Moderate",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(Severity::Critical),
            "High" => Ok(Severity::High),
            "Moderate" => Ok(Severity::Moderate),
            "Low" => Ok(Severity::Low),
            other => Err(AllocationError::invalid_input(format!(
                "unknown severity '{}', expected one of Critical, High, Moderate, Low",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = AllocationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Incoming patient awaiting a hospital
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[validate(nested)]
    pub location: Location,
    pub severity: Severity,
    /// Free-form medical category, e.g. "Cardiac" or "Trauma"
    pub condition: String,
    pub requires_icu: bool,
}

/// Snapshot of a hospital's state at evaluation time
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(nested)]
    pub location: Location,
    pub total_beds: u32,
    pub available_beds: u32,
    pub icu_beds: u32,
    pub available_icu_beds: u32,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub doctors_on_duty: u32,
    /// Average wait in minutes
    #[serde(default)]
    pub avg_wait_time: u32,
}

impl Hospital {
    pub fn has_specialization(&self, tag: &str) -> bool {
        self.specializations.iter().any(|s| s == tag)
    }
}

/// Ambulance unit
///
/// Not consulted by selection. It only carries the speed used by the travel
/// estimator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Ambulance {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(nested)]
    pub location: Location,
    /// Cruising speed in km/h
    pub speed: f64,
    pub available: bool,
}

impl Ambulance {
    /// Estimated minutes from the ambulance's position to `destination`
    pub fn travel_time_to(&self, destination: &Location, factor: f64) -> Result<f64, AllocationError> {
        let distance_km = crate::core::distance::location_distance(&self.location, destination);
        crate::core::travel::travel_time_minutes(distance_km, self.speed, factor)
    }
}

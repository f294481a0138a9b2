//! Hospital Allocator - severity-weighted hospital selection for emergency dispatch
//!
//! This library picks the best-matching hospital for one incoming patient from
//! a snapshot of candidate hospitals, scoring distance, bed capacity and
//! specialization fit with weights that depend on the patient's severity.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    haversine_distance, score, select_best, traffic_factor, travel_time_minutes,
    AllocationError, Allocator, ScoredHospital,
};
pub use crate::models::{Ambulance, Hospital, Location, Patient, Severity};

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Ambulance, Hospital, Location, Patient, Severity};
pub use requests::{AllocationRequest, TravelEstimateRequest};
pub use responses::{ErrorResponse, HealthResponse, RankedHospital, RankingResponse, SelectionResponse, TravelEstimateResponse};

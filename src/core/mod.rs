// Core algorithm exports
pub mod allocator;
pub mod distance;
pub mod error;
pub mod filters;
pub mod scoring;
pub mod travel;

pub use allocator::{select_best, AllocationResult, Allocator, ScoredHospital, NO_SELECTION_SCORE};
pub use distance::{haversine_distance, location_distance};
pub use error::{AllocationError, BedPool};
pub use filters::is_eligible;
pub use scoring::{score, score_breakdown, ScoreBreakdown, SeverityWeightTable, SeverityWeights};
pub use travel::{traffic_factor, travel_time_minutes};

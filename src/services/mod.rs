// Service exports
pub mod traffic;

pub use traffic::{current_hour, TrafficSampler};

use crate::core::error::AllocationError;

/// Extra traffic severity applied during rush hours
const RUSH_HOUR_OFFSET: f64 = 0.3;

/// Width of the random traffic severity band
const RANDOM_SEVERITY_SPAN: f64 = 0.3;

/// How much a fully congested road slows travel (factor 1.8 at severity 1)
const CONGESTION_SLOWDOWN: f64 = 0.8;

/// Morning and evening rush windows, inclusive local hours
const RUSH_HOURS: [(u32, u32); 2] = [(7, 9), (16, 19)];

/// Whether a local wall-clock hour falls inside a rush window
#[inline]
pub fn is_rush_hour(hour: u32) -> bool {
    RUSH_HOURS
        .iter()
        .any(|&(start, end)| (start..=end).contains(&hour))
}

/// Multiplicative traffic factor in [1.0, 1.8]
///
/// Both inputs are supplied by the caller so the result is reproducible:
/// `hour` is the local hour (0-23) and `random_uniform01` a uniform sample
/// in [0, 1]. See [`crate::services::TrafficSampler`] for the wall-clock
/// wiring.
pub fn traffic_factor(hour: u32, random_uniform01: f64) -> Result<f64, AllocationError> {
    if hour > 23 {
        return Err(AllocationError::invalid_input(format!(
            "hour must be within 0-23, got {}",
            hour
        )));
    }
    if !(0.0..=1.0).contains(&random_uniform01) {
        return Err(AllocationError::invalid_input(format!(
            "traffic sample must be within [0, 1], got {}",
            random_uniform01
        )));
    }

    let offset = if is_rush_hour(hour) { RUSH_HOUR_OFFSET } else { 0.0 };
    let severity = (random_uniform01 * RANDOM_SEVERITY_SPAN + offset).min(1.0);

    Ok(1.0 + severity * CONGESTION_SLOWDOWN)
}

/// Estimated travel time in minutes
///
/// `time = distance / speed * 60 * factor`. Speed must be a positive,
/// finite number of km/h.
pub fn travel_time_minutes(distance_km: f64, speed_kph: f64, factor: f64) -> Result<f64, AllocationError> {
    if !speed_kph.is_finite() || speed_kph <= 0.0 {
        return Err(AllocationError::invalid_input(format!(
            "speed must be a positive number of km/h, got {}",
            speed_kph
        )));
    }

    Ok((distance_km / speed_kph) * 60.0 * factor)
}

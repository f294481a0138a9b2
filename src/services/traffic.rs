use chrono::Timelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::core::{error::AllocationError, travel::traffic_factor};

/// Source of traffic factors for live requests
///
/// Owns the random generator shared across handlers and reads the local
/// wall clock, keeping `traffic_factor` itself pure.
pub struct TrafficSampler {
    rng: Mutex<StdRng>,
}

impl TrafficSampler {
    /// Sampler seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Sampler with a fixed seed, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Build from an optional configured seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform sample in [0, 1)
    pub fn uniform(&self) -> f64 {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }

    /// Traffic factor for the given local hour
    pub fn sample(&self, hour: u32) -> Result<f64, AllocationError> {
        traffic_factor(hour, self.uniform())
    }

    /// Traffic factor for the current local hour
    pub fn sample_now(&self) -> Result<f64, AllocationError> {
        self.sample(current_hour())
    }
}

impl Default for TrafficSampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Current local wall-clock hour
pub fn current_hour() -> u32 {
    chrono::Local::now().hour()
}

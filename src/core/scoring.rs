use serde::{Deserialize, Serialize};

use crate::core::error::{AllocationError, BedPool};
use crate::models::{Hospital, Patient, Severity};

/// Distance at which the distance score reaches zero
pub const DISTANCE_CUTOFF_KM: f64 = 20.0;

/// Score given when a hospital lacks the required specialization
pub const UNSPECIALIZED_SCORE: f64 = 0.5;

/// Condition → required specialization tags. Anything not listed needs "General".
const CONDITION_SPECIALIZATIONS: &[(&str, &[&str])] = &[
    ("Trauma", &["Trauma"]),
    ("Cardiac", &["Cardiology"]),
    ("General", &["General"]),
];

const GENERAL_SPECIALIZATION: &[&str] = &["General"];

/// Weights for one severity tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityWeights {
    pub distance: f64,
    pub capacity: f64,
    pub specialization: f64,
}

impl SeverityWeights {
    pub const fn new(distance: f64, capacity: f64, specialization: f64) -> Self {
        Self { distance, capacity, specialization }
    }
}

/// Severity → weights lookup
///
/// Proximity dominates for urgent patients, specialization for the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityWeightTable {
    pub critical: SeverityWeights,
    pub high: SeverityWeights,
    pub moderate: SeverityWeights,
    pub low: SeverityWeights,
}

impl SeverityWeightTable {
    pub const STANDARD: SeverityWeightTable = SeverityWeightTable {
        critical: SeverityWeights::new(0.5, 0.3, 0.2),
        high: SeverityWeights::new(0.4, 0.3, 0.3),
        moderate: SeverityWeights::new(0.3, 0.3, 0.4),
        low: SeverityWeights::new(0.2, 0.3, 0.5),
    };

    #[inline]
    pub fn weights_for(&self, severity: Severity) -> SeverityWeights {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Moderate => self.moderate,
            Severity::Low => self.low,
        }
    }
}

impl Default for SeverityWeightTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Sub-scores and weighted total for one hospital/patient pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub distance_score: f64,
    pub capacity_score: f64,
    pub specialization_score: f64,
    pub weights: SeverityWeights,
    pub total: f64,
}

/// Calculate distance score (0-1)
/// Linear falloff, exactly 0 from the cutoff onwards
#[inline]
pub fn distance_score(distance_km: f64) -> f64 {
    (1.0 - distance_km / DISTANCE_CUTOFF_KM).max(0.0)
}

/// Calculate capacity score (0-1) from the bed pool the patient needs
///
/// A pool with nothing available scores 0 regardless of its size.
pub fn capacity_score(hospital: &Hospital, patient: &Patient) -> Result<f64, AllocationError> {
    if patient.requires_icu {
        pool_ratio(hospital, BedPool::Icu, hospital.available_icu_beds, hospital.icu_beds)
    } else {
        pool_ratio(hospital, BedPool::General, hospital.available_beds, hospital.total_beds)
    }
}

#[inline]
fn pool_ratio(
    hospital: &Hospital,
    pool: BedPool,
    available: u32,
    total: u32,
) -> Result<f64, AllocationError> {
    if available == 0 {
        return Ok(0.0);
    }
    if total == 0 {
        return Err(AllocationError::DataInconsistency {
            hospital_id: hospital.id.clone(),
            pool,
            available,
        });
    }

    Ok(available as f64 / total as f64)
}

/// Specialization tags that satisfy a patient condition
pub fn required_specializations(condition: &str) -> &'static [&'static str] {
    CONDITION_SPECIALIZATIONS
        .iter()
        .find(|(name, _)| *name == condition)
        .map(|(_, tags)| *tags)
        .unwrap_or(GENERAL_SPECIALIZATION)
}

/// Calculate specialization score: 1.0 on a match, 0.5 otherwise
#[inline]
pub fn specialization_score(hospital: &Hospital, patient: &Patient) -> f64 {
    let matched = required_specializations(&patient.condition)
        .iter()
        .any(|tag| hospital.has_specialization(tag));

    if matched {
        1.0
    } else {
        UNSPECIALIZED_SCORE
    }
}

/// Score a hospital for a patient with the given weight table
///
/// Scoring formula:
/// score = distance_score * w_distance
///       + capacity_score * w_capacity
///       + specialization_score * w_specialization
pub fn score_breakdown(
    hospital: &Hospital,
    patient: &Patient,
    distance_km: f64,
    table: &SeverityWeightTable,
) -> Result<ScoreBreakdown, AllocationError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(AllocationError::invalid_input(format!(
            "distance to hospital {} must be a finite, non-negative number of km, got {}",
            hospital.id, distance_km
        )));
    }

    let weights = table.weights_for(patient.severity);

    let distance_score = distance_score(distance_km);
    let capacity_score = capacity_score(hospital, patient)?;
    let specialization_score = specialization_score(hospital, patient);

    let total = distance_score * weights.distance
        + capacity_score * weights.capacity
        + specialization_score * weights.specialization;

    Ok(ScoreBreakdown {
        distance_score,
        capacity_score,
        specialization_score,
        weights,
        total,
    })
}

/// Score a hospital for a patient using the standard weight table
pub fn score(hospital: &Hospital, patient: &Patient, distance_km: f64) -> Result<f64, AllocationError> {
    score_breakdown(hospital, patient, distance_km, &SeverityWeightTable::STANDARD).map(|b| b.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn create_test_hospital(available_beds: u32, available_icu_beds: u32, specs: &[&str]) -> Hospital {
        Hospital {
            id: "H1".to_string(),
            location: Location::new(17.40, 78.48),
            total_beds: 200,
            available_beds,
            icu_beds: 30,
            available_icu_beds,
            specializations: specs.iter().map(|s| s.to_string()).collect(),
            doctors_on_duty: 20,
            avg_wait_time: 10,
        }
    }

    fn create_test_patient(severity: Severity, condition: &str, requires_icu: bool) -> Patient {
        Patient {
            location: Location::new(17.3850, 78.4867),
            severity,
            condition: condition.to_string(),
            requires_icu,
        }
    }

    #[test]
    fn test_distance_score() {
        assert_eq!(distance_score(0.0), 1.0);
        assert!((distance_score(5.0) - 0.75).abs() < 1e-12);
        assert_eq!(distance_score(20.0), 0.0);
        assert_eq!(distance_score(35.0), 0.0);
    }

    #[test]
    fn test_capacity_score_icu() {
        let hospital = create_test_hospital(50, 6, &[]);
        let patient = create_test_patient(Severity::Critical, "Cardiac", true);

        let score = capacity_score(&hospital, &patient).unwrap();
        assert!((score - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_capacity_score_general() {
        let hospital = create_test_hospital(50, 6, &[]);
        let patient = create_test_patient(Severity::Low, "Other", false);

        let score = capacity_score(&hospital, &patient).unwrap();
        assert!((score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_capacity_score_full_occupancy_is_zero() {
        let hospital = create_test_hospital(0, 0, &[]);

        let icu = create_test_patient(Severity::High, "Trauma", true);
        assert_eq!(capacity_score(&hospital, &icu).unwrap(), 0.0);

        let ward = create_test_patient(Severity::High, "Trauma", false);
        assert_eq!(capacity_score(&hospital, &ward).unwrap(), 0.0);
    }

    #[test]
    fn test_capacity_score_zero_total_is_inconsistent() {
        let mut hospital = create_test_hospital(10, 2, &[]);
        hospital.icu_beds = 0;
        let patient = create_test_patient(Severity::Critical, "Cardiac", true);

        let err = capacity_score(&hospital, &patient).unwrap_err();
        assert_eq!(
            err,
            AllocationError::DataInconsistency {
                hospital_id: "H1".to_string(),
                pool: BedPool::Icu,
                available: 2,
            }
        );

        // The general pool is still consistent
        let ward = create_test_patient(Severity::Critical, "Cardiac", false);
        assert!(capacity_score(&hospital, &ward).is_ok());
    }

    #[test]
    fn test_required_specializations() {
        assert_eq!(required_specializations("Trauma"), &["Trauma"]);
        assert_eq!(required_specializations("Cardiac"), &["Cardiology"]);
        assert_eq!(required_specializations("General"), &["General"]);
        assert_eq!(required_specializations("Burns"), &["General"]);
    }

    #[test]
    fn test_specialization_score() {
        let cardio = create_test_hospital(10, 1, &["Cardiology", "General"]);
        let general = create_test_hospital(10, 1, &["General"]);
        let cardiac = create_test_patient(Severity::High, "Cardiac", false);
        let unknown = create_test_patient(Severity::High, "Poisoning", false);

        assert_eq!(specialization_score(&cardio, &cardiac), 1.0);
        assert_eq!(specialization_score(&general, &cardiac), 0.5);
        assert_eq!(specialization_score(&general, &unknown), 1.0);

        let none = create_test_hospital(10, 1, &[]);
        assert_eq!(specialization_score(&none, &unknown), 0.5);
    }

    #[test]
    fn test_weight_table_rows_sum_to_one() {
        for severity in Severity::ALL {
            let w = SeverityWeightTable::STANDARD.weights_for(severity);
            assert!((w.distance + w.capacity + w.specialization - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_score_combination() {
        let hospital = create_test_hospital(50, 6, &["Cardiology"]);
        let patient = create_test_patient(Severity::Critical, "Cardiac", true);

        // 0.75 * 0.5 + 0.2 * 0.3 + 1.0 * 0.2
        let total = score(&hospital, &patient, 5.0).unwrap();
        assert!((total - 0.635).abs() < 1e-12, "got {}", total);
    }

    #[test]
    fn test_severity_shifts_emphasis() {
        // Close but unspecialized vs. far but specialized
        let near = create_test_hospital(50, 6, &[]);
        let far = create_test_hospital(50, 6, &["Trauma"]);

        let critical = create_test_patient(Severity::Critical, "Trauma", false);
        assert!(score(&near, &critical, 1.0).unwrap() > score(&far, &critical, 15.0).unwrap());

        let low = create_test_patient(Severity::Low, "Trauma", false);
        assert!(score(&near, &low, 1.0).unwrap() < score(&far, &low, 15.0).unwrap());
    }

    #[test]
    fn test_score_rejects_malformed_distance() {
        let hospital = create_test_hospital(50, 6, &["Cardiology"]);
        let patient = create_test_patient(Severity::Critical, "Cardiac", true);

        for distance in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -40.0, -0.5] {
            assert!(
                matches!(score(&hospital, &patient, distance), Err(AllocationError::InvalidInput(_))),
                "distance {} should be rejected",
                distance
            );
        }

        // Zero and far-away distances are still fine
        assert!(score(&hospital, &patient, 0.0).is_ok());
        assert!(score(&hospital, &patient, 1_000.0).is_ok());
    }

    #[test]
    fn test_breakdown_reports_weights() {
        let hospital = create_test_hospital(50, 6, &["General"]);
        let patient = create_test_patient(Severity::Moderate, "Other", false);

        let breakdown =
            score_breakdown(&hospital, &patient, 0.0, &SeverityWeightTable::STANDARD).unwrap();
        assert_eq!(breakdown.weights, SeverityWeights::new(0.3, 0.3, 0.4));
        assert_eq!(breakdown.distance_score, 1.0);
        assert_eq!(breakdown.specialization_score, 1.0);
        assert!((breakdown.total - (0.3 + 0.25 * 0.3 + 0.4)).abs() < 1e-12);
    }
}

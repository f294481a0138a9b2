// Unit tests for Hospital Allocator

use hospital_allocator::core::{
    distance::haversine_distance,
    filters::is_eligible,
    scoring::{capacity_score, distance_score, required_specializations, score, specialization_score},
    travel::{traffic_factor, travel_time_minutes},
    AllocationError,
};
use hospital_allocator::models::{Hospital, Location, Patient, Severity};

fn hospital(id: &str, available_beds: u32, available_icu_beds: u32, specs: &[&str]) -> Hospital {
    Hospital {
        id: id.to_string(),
        location: Location::new(17.40, 78.48),
        total_beds: 100,
        available_beds,
        icu_beds: 10,
        available_icu_beds,
        specializations: specs.iter().map(|s| s.to_string()).collect(),
        doctors_on_duty: 12,
        avg_wait_time: 15,
    }
}

fn patient(severity: Severity, condition: &str, requires_icu: bool) -> Patient {
    Patient {
        location: Location::new(17.3850, 78.4867),
        severity,
        condition: condition.to_string(),
        requires_icu,
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(17.3850, 78.4867, 17.3850, 78.4867);
    assert_eq!(distance, 0.0);
}

#[test]
fn test_haversine_distance_across_city() {
    // Secunderabad to Gachibowli is roughly 15-20 km
    let distance = haversine_distance(17.4399, 78.4983, 17.4401, 78.3489);
    assert!(distance > 14.0 && distance < 17.0, "got {}", distance);
}

#[test]
fn test_distance_score_boundaries() {
    assert_eq!(distance_score(0.0), 1.0);
    assert!((distance_score(10.0) - 0.5).abs() < 1e-12);
    assert_eq!(distance_score(20.0), 0.0);
    assert_eq!(distance_score(500.0), 0.0);
}

#[test]
fn test_capacity_score_uses_the_right_pool() {
    let h = hospital("H1", 40, 5, &[]);

    let icu = capacity_score(&h, &patient(Severity::High, "Trauma", true)).unwrap();
    assert!((icu - 0.5).abs() < 1e-12);

    let ward = capacity_score(&h, &patient(Severity::High, "Trauma", false)).unwrap();
    assert!((ward - 0.4).abs() < 1e-12);
}

#[test]
fn test_capacity_score_zero_total_with_available_beds() {
    let mut h = hospital("BROKEN", 3, 0, &[]);
    h.total_beds = 0;

    let err = capacity_score(&h, &patient(Severity::Low, "Other", false)).unwrap_err();
    assert!(matches!(err, AllocationError::DataInconsistency { ref hospital_id, .. } if hospital_id == "BROKEN"));
}

#[test]
fn test_capacity_score_zero_total_zero_available() {
    let mut h = hospital("EMPTY", 0, 0, &[]);
    h.total_beds = 0;
    h.icu_beds = 0;

    assert_eq!(capacity_score(&h, &patient(Severity::Low, "Other", false)).unwrap(), 0.0);
    assert_eq!(capacity_score(&h, &patient(Severity::Low, "Other", true)).unwrap(), 0.0);
}

#[test]
fn test_specialization_lookup() {
    assert_eq!(required_specializations("Trauma"), &["Trauma"]);
    assert_eq!(required_specializations("Cardiac"), &["Cardiology"]);
    assert_eq!(required_specializations("Stroke"), &["General"]);

    let trauma_centre = hospital("T", 10, 1, &["Trauma"]);
    assert_eq!(specialization_score(&trauma_centre, &patient(Severity::High, "Trauma", false)), 1.0);
    assert_eq!(specialization_score(&trauma_centre, &patient(Severity::High, "Stroke", false)), 0.5);
}

#[test]
fn test_score_per_severity() {
    let h = hospital("H1", 50, 5, &["General"]);

    // distance 0, capacity 0.5, specialization 1.0
    let expected = [
        (Severity::Critical, 0.5 + 0.15 + 0.2),
        (Severity::High, 0.4 + 0.15 + 0.3),
        (Severity::Moderate, 0.3 + 0.15 + 0.4),
        (Severity::Low, 0.2 + 0.15 + 0.5),
    ];

    for (severity, want) in expected {
        let got = score(&h, &patient(severity, "Other", false), 0.0).unwrap();
        assert!((got - want).abs() < 1e-12, "{}: got {}, want {}", severity, got, want);
    }
}

#[test]
fn test_unknown_severity_is_invalid_input() {
    let err = "Urgent".parse::<Severity>().unwrap_err();
    assert!(matches!(err, AllocationError::InvalidInput(_)));
}

#[test]
fn test_eligibility() {
    let full = hospital("FULL", 10, 0, &[]);
    assert!(!is_eligible(&full, &patient(Severity::Critical, "Cardiac", true)));
    assert!(is_eligible(&full, &patient(Severity::Critical, "Cardiac", false)));
}

#[test]
fn test_travel_estimate() {
    let factor = traffic_factor(8, 0.5).unwrap();
    assert!((factor - (1.0 + 0.45 * 0.8)).abs() < 1e-12);

    let minutes = travel_time_minutes(10.0, 60.0, factor).unwrap();
    assert!((minutes - 10.0 * factor).abs() < 1e-9);

    assert!(matches!(
        travel_time_minutes(10.0, 0.0, factor),
        Err(AllocationError::InvalidInput(_))
    ));
}

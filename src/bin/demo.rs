// Reference run: one Hyderabad cardiac patient against two hospitals

use hospital_allocator::core::select_best;
use hospital_allocator::models::{Hospital, Location, Patient, Severity};

fn main() -> Result<(), hospital_allocator::AllocationError> {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let patient = Patient {
        location: Location::new(17.3850, 78.4867), // Hyderabad
        severity: Severity::Critical,
        condition: "Cardiac".to_string(),
        requires_icu: true,
    };

    let hospitals = vec![
        Hospital {
            id: "H1".to_string(),
            location: Location::new(17.40, 78.48),
            total_beds: 200,
            available_beds: 50,
            icu_beds: 30,
            available_icu_beds: 5,
            specializations: vec!["Cardiology".to_string(), "General".to_string()],
            doctors_on_duty: 20,
            avg_wait_time: 10,
        },
        Hospital {
            id: "H2".to_string(),
            location: Location::new(17.45, 78.50),
            total_beds: 150,
            available_beds: 20,
            icu_beds: 20,
            available_icu_beds: 2,
            specializations: vec!["General".to_string()],
            doctors_on_duty: 15,
            avg_wait_time: 20,
        },
    ];

    match select_best(&patient, &hospitals)? {
        Some(best) => {
            println!("\n✅ BEST HOSPITAL SELECTED");
            println!("-------------------------");
            println!("Hospital ID : {}", best.hospital.id);
            println!("Score       : {}", round3(best.score()));
        }
        None => {
            println!("\n❌ NO ELIGIBLE HOSPITAL");
        }
    }

    Ok(())
}

/// Round to three decimals, printed without trailing zeros
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

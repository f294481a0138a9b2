use crate::models::{Hospital, Patient};

/// Check if a hospital may receive the patient at all
///
/// An ICU patient is never sent to a hospital with no free ICU bed, however
/// well it scores otherwise.
#[inline]
pub fn is_eligible(hospital: &Hospital, patient: &Patient) -> bool {
    !(patient.requires_icu && hospital.available_icu_beds == 0)
}

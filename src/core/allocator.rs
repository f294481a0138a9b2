use crate::core::{
    distance::location_distance,
    error::AllocationError,
    filters::is_eligible,
    scoring::{score_breakdown, ScoreBreakdown, SeverityWeightTable},
};
use crate::models::{Hospital, Patient};

/// Score reported when no hospital could be selected
pub const NO_SELECTION_SCORE: f64 = -1.0;

/// A hospital together with how it scored for the patient
#[derive(Debug, Clone, Copy)]
pub struct ScoredHospital<'a> {
    pub hospital: &'a Hospital,
    pub distance_km: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredHospital<'_> {
    #[inline]
    pub fn score(&self) -> f64 {
        self.breakdown.total
    }
}

/// Result of a selection pass
#[derive(Debug)]
pub struct AllocationResult<'a> {
    pub selection: Option<ScoredHospital<'a>>,
    /// Number of candidate hospitals offered
    pub evaluated: usize,
    /// Number of candidates that passed the eligibility filter
    pub eligible: usize,
    /// Ids of hospitals dropped because their data could not be scored
    pub skipped: Vec<String>,
}

impl<'a> AllocationResult<'a> {
    /// Winning score, or [`NO_SELECTION_SCORE`] when nothing was selected
    pub fn score(&self) -> f64 {
        self.selection
            .as_ref()
            .map_or(NO_SELECTION_SCORE, ScoredHospital::score)
    }

    /// `(hospital, score)` pair, `(None, -1.0)` when nothing was selected
    pub fn into_pair(self) -> (Option<&'a Hospital>, f64) {
        let score = self.score();
        (self.selection.map(|s| s.hospital), score)
    }
}

/// Greedy hospital selector
///
/// # Selection
/// 1. Eligibility filter (ICU availability)
/// 2. Haversine distance to the patient
/// 3. Severity-weighted score
/// 4. Keep the first hospital with the strictly highest score
#[derive(Debug, Clone)]
pub struct Allocator {
    weights: SeverityWeightTable,
}

impl Allocator {
    pub fn new(weights: SeverityWeightTable) -> Self {
        Self { weights }
    }

    pub fn with_standard_weights() -> Self {
        Self {
            weights: SeverityWeightTable::STANDARD,
        }
    }

    pub fn weights(&self) -> &SeverityWeightTable {
        &self.weights
    }

    /// Distance and score for a single hospital, eligibility not checked
    pub fn evaluate<'a>(
        &self,
        patient: &Patient,
        hospital: &'a Hospital,
    ) -> Result<ScoredHospital<'a>, AllocationError> {
        let distance_km = location_distance(&patient.location, &hospital.location);
        let breakdown = score_breakdown(hospital, patient, distance_km, &self.weights)?;

        tracing::debug!(
            "Scored hospital {}: {:.3} (distance {:.2} km)",
            hospital.id,
            breakdown.total,
            distance_km
        );

        Ok(ScoredHospital {
            hospital,
            distance_km,
            breakdown,
        })
    }

    /// Select the best hospital for a patient
    ///
    /// Hospitals are visited in input order and a later hospital only wins
    /// with a strictly greater score, so ties go to the first one seen. Any
    /// scoring error aborts the whole selection.
    ///
    /// # Arguments
    /// * `patient` - The patient to place
    /// * `hospitals` - Candidate hospitals, in priority order for ties
    ///
    /// # Returns
    /// AllocationResult with no selection when no hospital is eligible
    pub fn select<'a>(
        &self,
        patient: &Patient,
        hospitals: &'a [Hospital],
    ) -> Result<AllocationResult<'a>, AllocationError> {
        let mut eligible = 0;

        let (_, selection) = hospitals
            .iter()
            .filter(|hospital| self.admit(hospital, patient))
            .try_fold(
                (NO_SELECTION_SCORE, None),
                |(best_score, best), hospital| -> Result<(f64, Option<ScoredHospital<'a>>), AllocationError> {
                    eligible += 1;
                    let scored = self.evaluate(patient, hospital)?;

                    if scored.score() > best_score {
                        Ok((scored.score(), Some(scored)))
                    } else {
                        Ok((best_score, best))
                    }
                },
            )?;

        Ok(AllocationResult {
            selection,
            evaluated: hospitals.len(),
            eligible,
            skipped: Vec::new(),
        })
    }

    /// Like [`Allocator::select`], but hospitals whose data cannot be scored
    /// are skipped and reported instead of aborting the selection
    pub fn select_lenient<'a>(&self, patient: &Patient, hospitals: &'a [Hospital]) -> AllocationResult<'a> {
        let mut eligible = 0;
        let mut skipped = Vec::new();
        let mut best_score = NO_SELECTION_SCORE;
        let mut selection = None;

        for hospital in hospitals.iter().filter(|h| self.admit(h, patient)) {
            eligible += 1;

            let scored = match self.evaluate(patient, hospital) {
                Ok(scored) => scored,
                Err(e) => {
                    tracing::warn!("Skipping hospital {}: {}", hospital.id, e);
                    skipped.push(hospital.id.clone());
                    continue;
                }
            };

            if scored.score() > best_score {
                best_score = scored.score();
                selection = Some(scored);
            }
        }

        AllocationResult {
            selection,
            evaluated: hospitals.len(),
            eligible,
            skipped,
        }
    }

    /// Score every eligible hospital, best first
    ///
    /// The sort is stable, so equal scores keep their input order and the
    /// head of the ranking is the hospital [`Allocator::select`] would pick.
    pub fn rank<'a>(
        &self,
        patient: &Patient,
        hospitals: &'a [Hospital],
    ) -> Result<Vec<ScoredHospital<'a>>, AllocationError> {
        let mut ranking = hospitals
            .iter()
            .filter(|hospital| self.admit(hospital, patient))
            .map(|hospital| self.evaluate(patient, hospital))
            .collect::<Result<Vec<_>, _>>()?;

        ranking.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(ranking)
    }

    #[inline]
    fn admit(&self, hospital: &Hospital, patient: &Patient) -> bool {
        let eligible = is_eligible(hospital, patient);
        if !eligible {
            tracing::debug!("Skipping hospital {}: no ICU bed available", hospital.id);
        }
        eligible
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::with_standard_weights()
    }
}

/// Select the best hospital with the standard weight table
pub fn select_best<'a>(
    patient: &Patient,
    hospitals: &'a [Hospital],
) -> Result<Option<ScoredHospital<'a>>, AllocationError> {
    Allocator::with_standard_weights()
        .select(patient, hospitals)
        .map(|result| result.selection)
}

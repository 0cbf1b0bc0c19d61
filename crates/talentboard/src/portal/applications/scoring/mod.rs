//! The PDS scoring engine: rubric model, system defaults, partial
//! overrides, configuration resolution, weight validation, and the scoring
//! pass that turns a parsed profile into a persisted breakdown.

mod breakdown;
mod calculator;
mod criteria;
mod defaults;
mod overrides;
mod resolver;
mod weights;

pub use breakdown::{CriteriaScore, MatchBand, PdsScoreBreakdown};
pub use criteria::{BandRequirement, Criterion, ScoringCriteria, SubCriterion};
pub use overrides::{CriterionOverride, ScoringOverrides};
pub use resolver::{resolve, ResolvedScoring, ScoringConfigError, ScoringSystemUsed};
pub use weights::{validate_weights, WeightValidation, WEIGHT_TOLERANCE};

use chrono::{DateTime, Utc};

use super::domain::{Job, PdsProfile};

/// Stateless evaluator applying one resolved rubric to applicant profiles.
pub struct ScoringEngine {
    criteria: ScoringCriteria,
    source: ScoringSystemUsed,
}

impl ScoringEngine {
    pub fn new(resolved: ResolvedScoring) -> Self {
        Self {
            criteria: resolved.criteria,
            source: resolved.source,
        }
    }

    pub fn criteria(&self) -> &ScoringCriteria {
        &self.criteria
    }

    pub fn source(&self) -> ScoringSystemUsed {
        self.source
    }

    pub fn max_possible_score(&self) -> u32 {
        self.criteria.max_possible_score()
    }

    /// Score a profile against the rubric, stamping the current time.
    pub fn score(&self, profile: &PdsProfile, job: &Job) -> PdsScoreBreakdown {
        self.score_at(profile, job, Utc::now())
    }

    /// Deterministic scoring pass: fixed profile, job, rubric, and
    /// timestamp always produce an identical breakdown.
    pub fn score_at(
        &self,
        profile: &PdsProfile,
        job: &Job,
        applied_date: DateTime<Utc>,
    ) -> PdsScoreBreakdown {
        let criteria_scores = calculator::score_profile(profile, job, &self.criteria);
        PdsScoreBreakdown::assemble(criteria_scores, self.source, applied_date)
    }
}

//! Application intake and PDS scoring.
//!
//! The scoring engine converts a parsed Personal Data Sheet into a weighted
//! match score against a posting's rubric, with system-default,
//! company-level, and per-job override configurations resolved ahead of
//! each pass. Everything here is synchronous and pure apart from the axum
//! handlers in `router`.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantId, ApplicationId, ApplicationStatus, Award, Certification, Company, CompanyId,
    CriterionKey, EducationLevel, EligibilityTier, Job, JobId, JobScoringConfig, Measurement,
    PdsProfile, TrainingRecord, WorkExperience,
};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationScoreView, JobBoard, ProfileProvider,
    RepositoryError,
};
pub use router::scoring_router;
pub use scoring::{
    resolve, validate_weights, BandRequirement, CriteriaScore, Criterion, CriterionOverride,
    MatchBand, PdsScoreBreakdown, ResolvedScoring, ScoringConfigError, ScoringCriteria,
    ScoringEngine, ScoringOverrides, ScoringSystemUsed, SubCriterion, WeightValidation,
    WEIGHT_TOLERANCE,
};
pub use service::{ApplicationScoringService, ScoringServiceError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    ApplicantId, ApplicationId, ApplicationStatus, Company, CompanyId, Job, JobId, PdsProfile,
};
use super::scoring::PdsScoreBreakdown;

/// Persisted application: who applied where, plus the match score and full
/// breakdown attached at scoring time. A rescore supersedes the stored
/// breakdown; it is never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: ApplicantId,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    /// Convention: the breakdown percentage (0-100), not the raw point
    /// total. Point totals live inside `match_details`.
    pub match_score: Option<f64>,
    pub match_details: Option<PdsScoreBreakdown>,
}

impl ApplicationRecord {
    pub fn match_summary(&self) -> String {
        match &self.match_details {
            Some(breakdown) => breakdown.summary(),
            None => "not yet scored".to_string(),
        }
    }

    pub fn score_view(&self) -> ApplicationScoreView {
        ApplicationScoreView {
            application_id: self.id.clone(),
            job_id: self.job_id.clone(),
            applicant_id: self.applicant_id.clone(),
            status: self.status.label(),
            match_score: self.match_score,
            match_band: self
                .match_details
                .as_ref()
                .map(|breakdown| breakdown.band().label()),
            match_summary: self.match_summary(),
        }
    }
}

/// Sanitized representation of an application's scoring status for list and
/// review surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationScoreView {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: ApplicantId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_band: Option<&'static str>,
    pub match_summary: String,
}

/// Job and company lookup owned by the external posting store.
pub trait JobBoard: Send + Sync {
    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError>;
}

/// Parsed-profile lookup owned by the external PDS pipeline.
pub trait ProfileProvider: Send + Sync {
    fn profile(&self, id: &ApplicantId) -> Result<Option<PdsProfile>, RepositoryError>;
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn find(
        &self,
        job_id: &JobId,
        applicant_id: &ApplicantId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use tracing::warn;

use super::domain::{
    ApplicantId, ApplicationId, ApplicationStatus, Company, CompanyId, Job, JobId,
};
use super::repository::{
    ApplicationRecord, ApplicationRepository, JobBoard, ProfileProvider, RepositoryError,
};
use super::scoring::{
    resolve, validate_weights, PdsScoreBreakdown, ResolvedScoring, ScoringConfigError,
    ScoringCriteria, ScoringEngine, ScoringSystemUsed, WeightValidation,
};

/// Service composing the job board, profile provider, application store,
/// and the scoring engine behind the portal's scoring endpoints.
pub struct ApplicationScoringService<J, P, R> {
    jobs: Arc<J>,
    profiles: Arc<P>,
    applications: Arc<R>,
    system_default: ScoringCriteria,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, AtomicOrdering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<J, P, R> ApplicationScoringService<J, P, R>
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    pub fn new(jobs: Arc<J>, profiles: Arc<P>, applications: Arc<R>) -> Self {
        Self {
            jobs,
            profiles,
            applications,
            system_default: ScoringCriteria::system_default(),
        }
    }

    /// Replace the built-in system default, rejecting a rubric that fails
    /// weight validation; the system baseline must always be scorable.
    pub fn with_system_default(
        jobs: Arc<J>,
        profiles: Arc<P>,
        applications: Arc<R>,
        system_default: ScoringCriteria,
    ) -> Result<Self, ScoringConfigError> {
        let report = validate_weights(&system_default);
        if !report.valid {
            return Err(ScoringConfigError::ConfigurationInvalid {
                source_tag: ScoringSystemUsed::Default,
                total_weight: report.total_weight,
                enabled: report.enabled,
            });
        }

        Ok(Self {
            jobs,
            profiles,
            applications,
            system_default,
        })
    }

    pub fn system_default(&self) -> &ScoringCriteria {
        &self.system_default
    }

    fn job_and_company(&self, job_id: &JobId) -> Result<(Job, Company), ScoringServiceError> {
        let job = self
            .jobs
            .job(job_id)?
            .ok_or_else(|| ScoringServiceError::JobNotFound(job_id.clone()))?;
        let company = self
            .jobs
            .company(&job.company_id)?
            .ok_or_else(|| ScoringServiceError::CompanyNotFound(job.company_id.clone()))?;
        Ok((job, company))
    }

    /// Resolution with the invalid-override safety net: a broken stored
    /// rubric is logged and replaced by the system default so scoring and
    /// display are never blocked by an administrator's editing mistake.
    fn resolve_with_fallback(&self, job: &Job, company: &Company) -> ResolvedScoring {
        match resolve(job, company, &self.system_default) {
            Ok(resolved) => resolved,
            Err(error) => {
                warn!(job = %job.id, %error, "falling back to system default rubric");
                ResolvedScoring {
                    criteria: self.system_default.clone(),
                    source: ScoringSystemUsed::Default,
                }
            }
        }
    }

    /// Effective configuration for a job, for display and editing surfaces.
    pub fn resolve_config(&self, job_id: &JobId) -> Result<ResolvedScoring, ScoringServiceError> {
        let (job, company) = self.job_and_company(job_id)?;
        Ok(self.resolve_with_fallback(&job, &company))
    }

    /// Register an application ahead of scoring.
    pub fn submit(
        &self,
        job_id: &JobId,
        applicant_id: &ApplicantId,
    ) -> Result<ApplicationRecord, ScoringServiceError> {
        let (job, _) = self.job_and_company(job_id)?;
        self.profiles
            .profile(applicant_id)?
            .ok_or_else(|| ScoringServiceError::ProfileNotFound(applicant_id.clone()))?;

        if self.applications.find(&job.id, applicant_id)?.is_some() {
            return Err(ScoringServiceError::Repository(RepositoryError::Conflict));
        }

        let record = ApplicationRecord {
            id: next_application_id(),
            job_id: job.id,
            applicant_id: applicant_id.clone(),
            status: ApplicationStatus::Submitted,
            applied_date: chrono::Utc::now(),
            match_score: None,
            match_details: None,
        };

        let stored = self.applications.insert(record)?;
        Ok(stored)
    }

    /// Score an application and persist the breakdown onto its record.
    ///
    /// Concurrent rescores of the same application are last-write-wins;
    /// each run is a pure function of its own input snapshot.
    pub fn score_application(
        &self,
        job_id: &JobId,
        applicant_id: &ApplicantId,
    ) -> Result<PdsScoreBreakdown, ScoringServiceError> {
        let (job, company) = self.job_and_company(job_id)?;
        let profile = self
            .profiles
            .profile(applicant_id)?
            .ok_or_else(|| ScoringServiceError::ProfileNotFound(applicant_id.clone()))?;
        let mut record = self
            .applications
            .find(job_id, applicant_id)?
            .ok_or(RepositoryError::NotFound)?;

        let resolved = self.resolve_with_fallback(&job, &company);
        let engine = ScoringEngine::new(resolved);
        let breakdown = engine.score(&profile, &job);

        record.match_score = Some(breakdown.percentage);
        record.match_details = Some(breakdown.clone());
        if record.status == ApplicationStatus::Submitted {
            record.status = ApplicationStatus::Screening;
        }
        self.applications.update(record)?;

        Ok(breakdown)
    }

    /// Rescore every application on a job, e.g. after a rubric edit.
    /// Applications whose profile has vanished are skipped, not fatal.
    pub fn rescore_job(&self, job_id: &JobId) -> Result<usize, ScoringServiceError> {
        let records = self.applications.for_job(job_id)?;
        let mut rescored = 0;
        for record in records {
            match self.score_application(job_id, &record.applicant_id) {
                Ok(_) => rescored += 1,
                Err(ScoringServiceError::ProfileNotFound(applicant_id)) => {
                    warn!(%job_id, %applicant_id, "skipping rescore; profile missing");
                }
                Err(other) => return Err(other),
            }
        }
        Ok(rescored)
    }

    /// Applications for a job ordered for the review UI: highest match
    /// first, ties broken by earlier submission, then id. Unscored
    /// applications sort last.
    pub fn ranked_applications(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationRecord>, ScoringServiceError> {
        let mut records = self.applications.for_job(job_id)?;
        records.sort_by(|a, b| {
            let by_score = match (a.match_score, b.match_score) {
                (Some(left), Some(right)) => {
                    right.partial_cmp(&left).unwrap_or(Ordering::Equal)
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_score
                .then_with(|| a.applied_date.cmp(&b.applied_date))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }

    /// Weight-sum check for the admin configuration editor; a failed report
    /// blocks only the save action, never scoring.
    pub fn validate_config(&self, criteria: &ScoringCriteria) -> WeightValidation {
        validate_weights(criteria)
    }

    /// Fetch an application for status endpoints.
    pub fn application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ScoringServiceError> {
        let record = self
            .applications
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("company {0} not found")]
    CompanyNotFound(CompanyId),
    #[error("no parsed PDS profile for applicant {0}")]
    ProfileNotFound(ApplicantId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::portal::applications::domain::{
    ApplicantId, ApplicationId, Award, Certification, Company, CompanyId, CriterionKey,
    EducationLevel, EligibilityTier, Job, JobId, JobScoringConfig, PdsProfile, TrainingRecord,
    WorkExperience,
};
use crate::portal::applications::repository::{
    ApplicationRecord, ApplicationRepository, JobBoard, ProfileProvider, RepositoryError,
};
use crate::portal::applications::scoring::{
    CriterionOverride, ResolvedScoring, ScoringCriteria, ScoringEngine, ScoringOverrides,
    ScoringSystemUsed,
};
use crate::portal::applications::{scoring_router, ApplicationScoringService};

pub(super) fn applied_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Posting in a category none of the sample applicant's work history
/// touches, so relevant experience measures zero.
pub(super) fn job() -> Job {
    Job {
        id: JobId("job-hr-0001".to_string()),
        company_id: CompanyId("co-statewide".to_string()),
        title: "Records Management Officer".to_string(),
        category: "Human Resources".to_string(),
        required_skills: vec![
            "Data Encoding".to_string(),
            "Records Management".to_string(),
            "Customer Service".to_string(),
            "Technical Writing".to_string(),
        ],
        scoring: None,
    }
}

pub(super) fn company() -> Company {
    Company {
        id: CompanyId("co-statewide".to_string()),
        name: "Statewide Logistics Group".to_string(),
        custom_scoring: None,
    }
}

/// Ten years of employment, master's degree, two trainings, CS Professional
/// eligibility, three matching skills, no awards, no relevant experience,
/// one certification.
pub(super) fn sample_profile() -> PdsProfile {
    PdsProfile {
        applicant_id: ApplicantId("apl-0001".to_string()),
        highest_education: Some(EducationLevel::Masters),
        work_history: vec![
            WorkExperience {
                position: "Senior Dispatch Supervisor".to_string(),
                employer: "Statewide Logistics Group".to_string(),
                category: "Logistics".to_string(),
                years: 6,
            },
            WorkExperience {
                position: "Dispatch Clerk".to_string(),
                employer: "Harbor Freight Lines".to_string(),
                category: "Logistics".to_string(),
                years: 4,
            },
        ],
        trainings: vec![
            TrainingRecord {
                title: "Records Management Basics".to_string(),
                provider: "Civil Service Institute".to_string(),
                hours: 16,
            },
            TrainingRecord {
                title: "Data Privacy Orientation".to_string(),
                provider: "Civil Service Institute".to_string(),
                hours: 8,
            },
        ],
        eligibility: Some(EligibilityTier::Professional),
        skills: vec![
            "Data Encoding".to_string(),
            "Records Management".to_string(),
            "Customer Service".to_string(),
        ],
        awards: Vec::new(),
        certifications: vec![Certification {
            name: "Certified Records Analyst".to_string(),
            issuer: "Records Institute".to_string(),
        }],
        measured: Default::default(),
    }
}

/// Every criterion at its top band.
pub(super) fn top_tier_profile() -> PdsProfile {
    PdsProfile {
        applicant_id: ApplicantId("apl-0002".to_string()),
        highest_education: Some(EducationLevel::Doctorate),
        work_history: vec![WorkExperience {
            position: "HR Director".to_string(),
            employer: "Statewide Logistics Group".to_string(),
            category: "Human Resources".to_string(),
            years: 12,
        }],
        trainings: (0..6)
            .map(|index| TrainingRecord {
                title: format!("Leadership Track {index}"),
                provider: "Civil Service Institute".to_string(),
                hours: 24,
            })
            .collect(),
        eligibility: Some(EligibilityTier::BoardOrBar),
        skills: vec![
            "Data Encoding".to_string(),
            "Records Management".to_string(),
            "Customer Service".to_string(),
            "Technical Writing".to_string(),
            "Technical Writing II".to_string(),
        ],
        awards: vec![
            Award {
                title: "Employee of the Year".to_string(),
                conferred_by: "Statewide Logistics Group".to_string(),
            },
            Award {
                title: "Service Excellence".to_string(),
                conferred_by: "Harbor Freight Lines".to_string(),
            },
            Award {
                title: "Dean's Medal".to_string(),
                conferred_by: "State University".to_string(),
            },
        ],
        certifications: vec![
            Certification {
                name: "CHRP".to_string(),
                issuer: "HR Institute".to_string(),
            },
            Certification {
                name: "Certified Records Analyst".to_string(),
                issuer: "Records Institute".to_string(),
            },
            Certification {
                name: "Six Sigma Green Belt".to_string(),
                issuer: "Quality Council".to_string(),
            },
        ],
        measured: Default::default(),
    }
}

pub(super) fn default_engine() -> ScoringEngine {
    ScoringEngine::new(ResolvedScoring {
        criteria: ScoringCriteria::system_default(),
        source: ScoringSystemUsed::Default,
    })
}

/// Company rubric whose enabled weights sum to 105: experience bumped
/// 20 -> 30 and education trimmed 20 -> 15 without rebalancing the rest.
pub(super) fn unbalanced_company() -> Company {
    let mut criteria = ScoringCriteria::system_default();
    criteria.experience.weight = 30.0;
    criteria.education.weight = 15.0;
    Company {
        custom_scoring: Some(criteria),
        ..company()
    }
}

/// Valid job-level override: weight moved from skills to experience.
pub(super) fn job_with_override() -> Job {
    let overrides = ScoringOverrides::default()
        .set(
            CriterionKey::Experience,
            CriterionOverride {
                weight: Some(30.0),
                ..Default::default()
            },
        )
        .set(
            CriterionKey::Skills,
            CriterionOverride {
                weight: Some(5.0),
                ..Default::default()
            },
        );

    Job {
        scoring: Some(JobScoringConfig {
            use_company_default: false,
            use_system_default: false,
            custom_scoring: Some(overrides),
        }),
        ..job()
    }
}

#[derive(Default)]
pub(super) struct MemoryJobBoard {
    jobs: Mutex<HashMap<JobId, Job>>,
    companies: Mutex<HashMap<CompanyId, Company>>,
}

impl MemoryJobBoard {
    pub(super) fn seed(job: Job, company: Company) -> Self {
        let board = Self::default();
        board.put_job(job);
        board.put_company(company);
        board
    }

    pub(super) fn put_job(&self, job: Job) {
        self.jobs
            .lock()
            .expect("job mutex poisoned")
            .insert(job.id.clone(), job);
    }

    pub(super) fn put_company(&self, company: Company) {
        self.companies
            .lock()
            .expect("company mutex poisoned")
            .insert(company.id.clone(), company);
    }
}

impl JobBoard for MemoryJobBoard {
    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.jobs.lock().expect("job mutex poisoned").get(id).cloned())
    }

    fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
        Ok(self
            .companies
            .lock()
            .expect("company mutex poisoned")
            .get(id)
            .cloned())
    }
}

#[derive(Default)]
pub(super) struct MemoryProfiles {
    profiles: Mutex<HashMap<ApplicantId, PdsProfile>>,
}

impl MemoryProfiles {
    pub(super) fn put(&self, profile: PdsProfile) {
        self.profiles
            .lock()
            .expect("profile mutex poisoned")
            .insert(profile.applicant_id.clone(), profile);
    }
}

impl ProfileProvider for MemoryProfiles {
    fn profile(&self, id: &ApplicantId) -> Result<Option<PdsProfile>, RepositoryError> {
        Ok(self
            .profiles
            .lock()
            .expect("profile mutex poisoned")
            .get(id)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryApplications {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryApplications {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn find(
        &self,
        job_id: &JobId,
        applicant_id: &ApplicantId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .find(|record| &record.job_id == job_id && &record.applicant_id == applicant_id)
            .cloned())
    }

    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.job_id == job_id)
            .cloned()
            .collect())
    }
}

pub(super) struct ConflictApplications;

impl ApplicationRepository for ConflictApplications {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn find(
        &self,
        _job_id: &JobId,
        _applicant_id: &ApplicantId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(None)
    }

    fn for_job(&self, _job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableApplications;

impl ApplicationRepository for UnavailableApplications {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find(
        &self,
        _job_id: &JobId,
        _applicant_id: &ApplicantId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_job(&self, _job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) type MemoryService =
    ApplicationScoringService<MemoryJobBoard, MemoryProfiles, MemoryApplications>;

pub(super) fn build_service() -> (
    MemoryService,
    Arc<MemoryJobBoard>,
    Arc<MemoryProfiles>,
    Arc<MemoryApplications>,
) {
    let board = Arc::new(MemoryJobBoard::seed(job(), company()));
    let profiles = Arc::new(MemoryProfiles::default());
    profiles.put(sample_profile());
    let applications = Arc::new(MemoryApplications::default());
    let service =
        ApplicationScoringService::new(board.clone(), profiles.clone(), applications.clone());
    (service, board, profiles, applications)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    scoring_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

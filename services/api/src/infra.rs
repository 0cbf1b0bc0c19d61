use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use talentboard::portal::applications::{
    ApplicantId, ApplicationId, ApplicationRecord, ApplicationRepository, Award, Certification,
    Company, CompanyId, CriterionKey, CriterionOverride, EducationLevel, EligibilityTier, Job,
    JobBoard, JobId, JobScoringConfig, PdsProfile, ProfileProvider, RepositoryError,
    ScoringCriteria, ScoringOverrides, TrainingRecord, WorkExperience,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
pub(crate) struct InMemoryJobBoard {
    jobs: Mutex<HashMap<JobId, Job>>,
    companies: Mutex<HashMap<CompanyId, Company>>,
}

impl InMemoryJobBoard {
    pub(crate) fn put_job(&self, job: Job) {
        self.jobs
            .lock()
            .expect("job mutex poisoned")
            .insert(job.id.clone(), job);
    }

    pub(crate) fn put_company(&self, company: Company) {
        self.companies
            .lock()
            .expect("company mutex poisoned")
            .insert(company.id.clone(), company);
    }
}

impl JobBoard for InMemoryJobBoard {
    fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self
            .jobs
            .lock()
            .expect("job mutex poisoned")
            .get(id)
            .cloned())
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
pub(crate) struct InMemoryProfileProvider {
    profiles: Mutex<HashMap<ApplicantId, PdsProfile>>,
}

impl InMemoryProfileProvider {
    pub(crate) fn put(&self, profile: PdsProfile) {
        self.profiles
            .lock()
            .expect("profile mutex poisoned")
            .insert(profile.applicant_id.clone(), profile);
    }
}

impl ProfileProvider for InMemoryProfileProvider {
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
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
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
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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

/// Seed the in-memory stores with a small portal: two employers (one with a
/// custom rubric), two postings (one carrying a job-level override), and
/// three parsed profiles of varying strength. Stands in for the document
/// database until the real stores are wired up at the boundary.
pub(crate) fn seed_portal() -> (Arc<InMemoryJobBoard>, Arc<InMemoryProfileProvider>) {
    let board = Arc::new(InMemoryJobBoard::default());

    board.put_company(Company {
        id: CompanyId("co-statewide".to_string()),
        name: "Statewide Logistics Group".to_string(),
        custom_scoring: None,
    });

    let mut meridian_rubric = ScoringCriteria::system_default();
    meridian_rubric.training.enabled = false;
    meridian_rubric.education.weight += 10.0;
    board.put_company(Company {
        id: CompanyId("co-meridian".to_string()),
        name: "Meridian Business Outsourcing".to_string(),
        custom_scoring: Some(meridian_rubric),
    });

    board.put_job(Job {
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
    });

    let it_overrides = ScoringOverrides::default()
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
    board.put_job(Job {
        id: JobId("job-it-0002".to_string()),
        company_id: CompanyId("co-meridian".to_string()),
        title: "Systems Administrator".to_string(),
        category: "Information Technology".to_string(),
        required_skills: vec![
            "Linux Administration".to_string(),
            "Network Troubleshooting".to_string(),
            "Scripting".to_string(),
        ],
        scoring: Some(JobScoringConfig {
            use_company_default: false,
            use_system_default: false,
            custom_scoring: Some(it_overrides),
        }),
    });

    let profiles = Arc::new(InMemoryProfileProvider::default());
    profiles.put(PdsProfile {
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
    });

    profiles.put(PdsProfile {
        applicant_id: ApplicantId("apl-0002".to_string()),
        highest_education: Some(EducationLevel::Bachelors),
        work_history: vec![WorkExperience {
            position: "HR Assistant".to_string(),
            employer: "Meridian Business Outsourcing".to_string(),
            category: "Human Resources".to_string(),
            years: 3,
        }],
        trainings: vec![TrainingRecord {
            title: "Onboarding Essentials".to_string(),
            provider: "People Academy".to_string(),
            hours: 8,
        }],
        eligibility: Some(EligibilityTier::Subprofessional),
        skills: vec![
            "Records Management".to_string(),
            "Customer Service".to_string(),
        ],
        awards: vec![Award {
            title: "Rookie of the Year".to_string(),
            conferred_by: "Meridian Business Outsourcing".to_string(),
        }],
        certifications: Vec::new(),
        measured: Default::default(),
    });

    profiles.put(PdsProfile {
        applicant_id: ApplicantId("apl-0003".to_string()),
        highest_education: Some(EducationLevel::HighSchool),
        work_history: Vec::new(),
        trainings: Vec::new(),
        eligibility: None,
        skills: vec!["Customer Service".to_string()],
        awards: Vec::new(),
        certifications: Vec::new(),
        measured: Default::default(),
    });

    (board, profiles)
}

//! Integration specifications for the application scoring workflow.
//!
//! Scenarios run end to end through the public service facade and HTTP
//! router: intake, rubric resolution, scoring, persistence, and ranking,
//! without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use talentboard::portal::applications::domain::{
        ApplicantId, ApplicationId, Certification, Company, CompanyId, EducationLevel,
        EligibilityTier, Job, JobId, PdsProfile, TrainingRecord, WorkExperience,
    };
    use talentboard::portal::applications::repository::{
        ApplicationRecord, ApplicationRepository, JobBoard, ProfileProvider, RepositoryError,
    };
    use talentboard::portal::applications::ApplicationScoringService;

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

    pub(super) fn profile() -> PdsProfile {
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

    #[derive(Default)]
    pub(super) struct MemoryJobBoard {
        jobs: Mutex<HashMap<JobId, Job>>,
        companies: Mutex<HashMap<CompanyId, Company>>,
    }

    impl MemoryJobBoard {
        pub(super) fn put_job(&self, job: Job) {
            self.jobs.lock().expect("lock").insert(job.id.clone(), job);
        }

        pub(super) fn put_company(&self, company: Company) {
            self.companies
                .lock()
                .expect("lock")
                .insert(company.id.clone(), company);
        }
    }

    impl JobBoard for MemoryJobBoard {
        fn job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
            Ok(self.jobs.lock().expect("lock").get(id).cloned())
        }

        fn company(&self, id: &CompanyId) -> Result<Option<Company>, RepositoryError> {
            Ok(self.companies.lock().expect("lock").get(id).cloned())
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
                .expect("lock")
                .insert(profile.applicant_id.clone(), profile);
        }
    }

    impl ProfileProvider for MemoryProfiles {
        fn profile(&self, id: &ApplicantId) -> Result<Option<PdsProfile>, RepositoryError> {
            Ok(self.profiles.lock().expect("lock").get(id).cloned())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryApplications {
        records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
    }

    impl ApplicationRepository for MemoryApplications {
        fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.id.clone(), record.clone());
            Ok(record)
        }

        fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(record.id.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
            Ok(self.records.lock().expect("lock").get(id).cloned())
        }

        fn find(
            &self,
            job_id: &JobId,
            applicant_id: &ApplicantId,
        ) -> Result<Option<ApplicationRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("lock")
                .values()
                .find(|record| &record.job_id == job_id && &record.applicant_id == applicant_id)
                .cloned())
        }

        fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .expect("lock")
                .values()
                .filter(|record| &record.job_id == job_id)
                .cloned()
                .collect())
        }
    }

    pub(super) type Service =
        ApplicationScoringService<MemoryJobBoard, MemoryProfiles, MemoryApplications>;

    pub(super) fn build_service() -> (
        Service,
        Arc<MemoryJobBoard>,
        Arc<MemoryProfiles>,
        Arc<MemoryApplications>,
    ) {
        let board = Arc::new(MemoryJobBoard::default());
        board.put_job(job());
        board.put_company(company());
        let profiles = Arc::new(MemoryProfiles::default());
        profiles.put(profile());
        let applications = Arc::new(MemoryApplications::default());
        let service =
            ApplicationScoringService::new(board.clone(), profiles.clone(), applications.clone());
        (service, board, profiles, applications)
    }
}

mod scoring_flow {
    use super::common::*;
    use talentboard::portal::applications::domain::{ApplicationStatus, CriterionKey};
    use talentboard::portal::applications::repository::ApplicationRepository;
    use talentboard::portal::applications::scoring::{
        CriterionOverride, ScoringCriteria, ScoringOverrides, ScoringSystemUsed,
    };
    use talentboard::portal::applications::JobScoringConfig;

    #[test]
    fn submit_then_score_attaches_the_breakdown() {
        let (service, _, _, applications) = build_service();

        let record = service
            .submit(&job().id, &profile().applicant_id)
            .expect("submission succeeds");
        assert_eq!(record.status, ApplicationStatus::Submitted);

        let breakdown = service
            .score_application(&job().id, &profile().applicant_id)
            .expect("scoring succeeds");

        assert_eq!(breakdown.total_score, 70);
        assert_eq!(breakdown.max_possible_score, 100);
        assert_eq!(breakdown.scoring_system_used, ScoringSystemUsed::Default);

        let stored = applications
            .fetch(&record.id)
            .expect("fetch succeeds")
            .expect("record present");
        assert_eq!(stored.status, ApplicationStatus::Screening);
        assert_eq!(stored.match_score, Some(breakdown.percentage));
        assert_eq!(
            stored.match_details.expect("breakdown attached").total_score,
            70
        );
    }

    #[test]
    fn company_rubric_applies_when_the_job_has_no_override() {
        let (service, board, _, _) = build_service();

        let mut custom = ScoringCriteria::system_default();
        custom.training.enabled = false;
        custom.education.weight += 10.0;
        let mut employer = company();
        employer.custom_scoring = Some(custom);
        board.put_company(employer);

        service
            .submit(&job().id, &profile().applicant_id)
            .expect("submission succeeds");
        let breakdown = service
            .score_application(&job().id, &profile().applicant_id)
            .expect("scoring succeeds");

        assert_eq!(breakdown.scoring_system_used, ScoringSystemUsed::CompanyCustom);
        // Training (4 earned, 10 possible) drops out of both sums.
        assert_eq!(breakdown.total_score, 66);
        assert_eq!(breakdown.max_possible_score, 90);
    }

    #[test]
    fn job_override_takes_precedence_over_the_company_rubric() {
        let (service, board, _, _) = build_service();

        let mut employer = company();
        employer.custom_scoring = Some(ScoringCriteria::system_default());
        board.put_company(employer);

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
        let mut posting = job();
        posting.scoring = Some(JobScoringConfig {
            use_company_default: false,
            use_system_default: false,
            custom_scoring: Some(overrides),
        });
        board.put_job(posting);

        let resolved = service
            .resolve_config(&job().id)
            .expect("resolution succeeds");
        assert_eq!(resolved.source, ScoringSystemUsed::JobCustom);
        assert!((resolved.criteria.experience.weight - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn broken_company_rubric_falls_back_to_the_system_default() {
        let (service, board, _, _) = build_service();

        let mut unbalanced = ScoringCriteria::system_default();
        unbalanced.experience.weight = 30.0;
        unbalanced.education.weight = 15.0;
        let mut employer = company();
        employer.custom_scoring = Some(unbalanced);
        board.put_company(employer);

        service
            .submit(&job().id, &profile().applicant_id)
            .expect("submission succeeds");
        let breakdown = service
            .score_application(&job().id, &profile().applicant_id)
            .expect("scoring never blocks on a broken override");

        assert_eq!(breakdown.scoring_system_used, ScoringSystemUsed::Default);
        assert_eq!(breakdown.total_score, 70);
    }
}

mod routing {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::common::*;
    use talentboard::portal::applications::scoring_router;

    fn json_request(method: &str, uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request builds")
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn apply_score_and_rank_through_the_router() {
        let (service, _, _, _) = build_service();
        let router = scoring_router(Arc::new(service));

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/jobs/job-hr-0001/applicants/apl-0001/apply",
                Vec::new(),
            ))
            .await
            .expect("apply route executes");
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/jobs/job-hr-0001/applicants/apl-0001/score",
                Vec::new(),
            ))
            .await
            .expect("score route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let breakdown = read_json(response).await;
        assert_eq!(breakdown.get("totalScore").and_then(Value::as_u64), Some(70));

        let response = router
            .clone()
            .oneshot(json_request(
                "GET",
                "/api/v1/jobs/job-hr-0001/applications",
                Vec::new(),
            ))
            .await
            .expect("list route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let entries = read_json(response).await;
        let entries = entries.as_array().expect("array payload");
        assert_eq!(entries.len(), 1);
        assert!(entries[0]
            .get("match_summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .contains("70.0%"));

        let response = router
            .oneshot(json_request(
                "GET",
                "/api/v1/jobs/job-hr-0001/scoring-config",
                Vec::new(),
            ))
            .await
            .expect("config route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let config = read_json(response).await;
        assert_eq!(
            config.get("scoring_system_used").and_then(Value::as_str),
            Some("default")
        );
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ApplicantId, ApplicationId, JobId};
use super::repository::{ApplicationRepository, JobBoard, ProfileProvider, RepositoryError};
use super::scoring::ScoringCriteria;
use super::service::{ApplicationScoringService, ScoringServiceError};

/// Router builder exposing the scoring endpoints consumed by the portal's
/// application-review, ranking, and admin-configuration surfaces.
pub fn scoring_router<J, P, R>(service: Arc<ApplicationScoringService<J, P, R>>) -> Router
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs/:job_id/applicants/:applicant_id/apply",
            post(apply_handler::<J, P, R>),
        )
        .route(
            "/api/v1/jobs/:job_id/applicants/:applicant_id/score",
            post(score_handler::<J, P, R>),
        )
        .route(
            "/api/v1/jobs/:job_id/scoring-config",
            get(config_handler::<J, P, R>),
        )
        .route(
            "/api/v1/scoring-config/validate",
            post(validate_config_handler::<J, P, R>),
        )
        .route(
            "/api/v1/jobs/:job_id/applications",
            get(ranked_handler::<J, P, R>),
        )
        .route(
            "/api/v1/applications/:application_id",
            get(application_handler::<J, P, R>),
        )
        .with_state(service)
}

fn error_response(error: ScoringServiceError) -> Response {
    let status = match &error {
        ScoringServiceError::JobNotFound(_)
        | ScoringServiceError::CompanyNotFound(_)
        | ScoringServiceError::ProfileNotFound(_)
        | ScoringServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ScoringServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ScoringServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn apply_handler<J, P, R>(
    State(service): State<Arc<ApplicationScoringService<J, P, R>>>,
    Path((job_id, applicant_id)): Path<(String, String)>,
) -> Response
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    match service.submit(&JobId(job_id), &ApplicantId(applicant_id)) {
        Ok(record) => {
            let view = record.score_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<J, P, R>(
    State(service): State<Arc<ApplicationScoringService<J, P, R>>>,
    Path((job_id, applicant_id)): Path<(String, String)>,
) -> Response
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    match service.score_application(&JobId(job_id), &ApplicantId(applicant_id)) {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn config_handler<J, P, R>(
    State(service): State<Arc<ApplicationScoringService<J, P, R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    match service.resolve_config(&JobId(job_id)) {
        Ok(resolved) => {
            let payload = json!({
                "scoring_system_used": resolved.source,
                "criteria": resolved.criteria,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn validate_config_handler<J, P, R>(
    State(service): State<Arc<ApplicationScoringService<J, P, R>>>,
    axum::Json(criteria): axum::Json<ScoringCriteria>,
) -> Response
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    let report = service.validate_config(&criteria);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn ranked_handler<J, P, R>(
    State(service): State<Arc<ApplicationScoringService<J, P, R>>>,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    match service.ranked_applications(&JobId(job_id)) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.score_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn application_handler<J, P, R>(
    State(service): State<Arc<ApplicationScoringService<J, P, R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    J: JobBoard + 'static,
    P: ProfileProvider + 'static,
    R: ApplicationRepository + 'static,
{
    match service.application(&ApplicationId(application_id)) {
        Ok(record) => {
            let view = record.score_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

use crate::infra::{seed_portal, InMemoryApplicationRepository};
use clap::Args;
use std::sync::Arc;
use talentboard::error::AppError;
use talentboard::portal::applications::{
    ApplicantId, ApplicationScoringService, JobId, ScoringCriteria,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Job posting to score against (defaults to the seeded HR posting)
    #[arg(long, default_value = "job-hr-0001")]
    pub(crate) job: String,
    /// Print the full per-criterion breakdown for each applicant
    #[arg(long)]
    pub(crate) show_breakdown: bool,
    /// Skip the admin rubric-validation walkthrough
    #[arg(long)]
    pub(crate) skip_validation: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        job,
        show_breakdown,
        skip_validation,
    } = args;

    let job_id = JobId(job);
    let (board, profiles) = seed_portal();
    let applications = Arc::new(InMemoryApplicationRepository::default());
    let service = ApplicationScoringService::new(board, profiles, applications);

    println!("Talentboard scoring demo");

    let resolved = match service.resolve_config(&job_id) {
        Ok(resolved) => resolved,
        Err(err) => {
            println!("  Unable to resolve a rubric for {}: {}", job_id, err);
            return Ok(());
        }
    };
    println!(
        "Job {} scored with the {} rubric (out of {} points)",
        job_id,
        resolved.source.label(),
        resolved.criteria.max_possible_score()
    );

    let applicants = ["apl-0001", "apl-0002", "apl-0003"];
    for applicant in applicants {
        let applicant_id = ApplicantId(applicant.to_string());
        if let Err(err) = service.submit(&job_id, &applicant_id) {
            println!("  Skipping {}: {}", applicant_id, err);
            continue;
        }
        let breakdown = match service.score_application(&job_id, &applicant_id) {
            Ok(breakdown) => breakdown,
            Err(err) => {
                println!("  Scoring unavailable for {}: {}", applicant_id, err);
                continue;
            }
        };
        println!(
            "- {} -> {} ({})",
            applicant_id,
            breakdown.summary(),
            breakdown.band().label()
        );
        if show_breakdown {
            for score in &breakdown.criteria_scores {
                let band = score.matched_criteria.as_deref().unwrap_or("no band");
                println!(
                    "    {}: {}/{} [{}] {}",
                    score.label, score.earned_points, score.max_points, band, score.details
                );
            }
        }
    }

    println!("\nReview queue (best match first)");
    match service.ranked_applications(&job_id) {
        Ok(ranked) => {
            for record in ranked {
                println!(
                    "- {} | {} | {}",
                    record.applicant_id,
                    record.status.label(),
                    record.match_summary()
                );
            }
        }
        Err(err) => println!("  Ranking unavailable: {}", err),
    }

    if skip_validation {
        return Ok(());
    }

    println!("\nAdmin rubric validation walkthrough");
    let mut draft = ScoringCriteria::system_default();
    draft.experience.weight = 30.0;
    let report = service.validate_config(&draft);
    println!(
        "- Draft rubric valid: {} (enabled weights sum to {:.2})",
        report.valid, report.total_weight
    );
    for error in &report.errors {
        println!("  blocked: {}", error);
    }
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }

    Ok(())
}

use tracing::warn;

use super::super::domain::{CriterionKey, Job, Measurement, PdsProfile};
use super::breakdown::CriteriaScore;
use super::criteria::{Criterion, ScoringCriteria};

/// Derive the applicant-side measurement for one criterion.
///
/// A pre-extracted value on the profile wins; otherwise the measurement is
/// derived from the structured PDS fields. Missing data measures as
/// `Absent`, which never qualifies for a band.
pub(crate) fn measure(key: CriterionKey, profile: &PdsProfile, job: &Job) -> Measurement {
    if let Some(supplied) = profile.measured.get(&key) {
        return supplied.clone();
    }

    match key {
        CriterionKey::Education => profile
            .highest_education
            .map_or(Measurement::Absent, Measurement::Education),
        CriterionKey::Experience => Measurement::Quantity(profile.total_experience_years()),
        CriterionKey::Training => Measurement::Quantity(profile.trainings.len() as u32),
        CriterionKey::Eligibility => profile
            .eligibility
            .map_or(Measurement::Absent, Measurement::Eligibility),
        CriterionKey::Skills => {
            Measurement::Quantity(profile.matching_skill_count(&job.required_skills))
        }
        CriterionKey::Awards => Measurement::Quantity(profile.awards.len() as u32),
        CriterionKey::RelevantExperience => {
            Measurement::Quantity(profile.relevant_experience_years(&job.category))
        }
        CriterionKey::Certifications => {
            Measurement::Quantity(profile.certifications.len() as u32)
        }
    }
}

fn measurement_summary(key: CriterionKey, measurement: &Measurement) -> String {
    match measurement {
        Measurement::Quantity(value) => match key {
            CriterionKey::Experience => format!("{value} year(s) of employment"),
            CriterionKey::Training => format!("{value} training(s) attended"),
            CriterionKey::Skills => format!("{value} matching skill(s)"),
            CriterionKey::Awards => format!("{value} award(s)"),
            CriterionKey::RelevantExperience => format!("{value} relevant year(s)"),
            CriterionKey::Certifications => format!("{value} certification(s)"),
            _ => format!("measured value {value}"),
        },
        Measurement::Education(level) => format!("holds {}", level.label()),
        Measurement::Eligibility(tier) => format!("holds {}", tier.label()),
        Measurement::Absent => "no data on file".to_string(),
    }
}

fn score_criterion(
    key: CriterionKey,
    criterion: &Criterion,
    measurement: Measurement,
) -> CriteriaScore {
    let mut score = CriteriaScore {
        key,
        label: criterion.label.clone(),
        earned_points: 0,
        max_points: criterion.max_points,
        weight: criterion.weight,
        percentage: 0.0,
        matched_criteria: None,
        details: String::new(),
        enabled: criterion.enabled,
    };

    if !criterion.enabled {
        score.details = "criterion disabled for this posting".to_string();
        return score;
    }

    if !criterion.bands_well_formed() {
        warn!(
            criterion = key.label(),
            "sub-criteria list is empty or not ordered highest first; awarding zero"
        );
        score.details =
            "sub-criteria misconfigured; awarded zero pending administrator review".to_string();
        return score;
    }

    let summary = measurement_summary(key, &measurement);
    match criterion.best_match(&measurement) {
        Some(band) => {
            // Band points are authored within max_points; clamp so a stray
            // override can never push a criterion above its ceiling.
            score.earned_points = band.points.min(criterion.max_points);
            score.matched_criteria = Some(band.name.clone());
            score.details = format!("{summary} qualifies for '{}'", band.name);
        }
        None => {
            score.details = format!("no qualifying tier for {summary}");
        }
    }

    if criterion.max_points > 0 {
        score.percentage =
            f64::from(score.earned_points) / f64::from(criterion.max_points) * 100.0;
    }

    score
}

/// Evaluate every criterion in canonical order against the profile.
///
/// Disabled criteria still appear in the output (with zero earned points and
/// `enabled = false`) so display surfaces stay complete; aggregation into
/// totals happens in the breakdown.
pub(crate) fn score_profile(
    profile: &PdsProfile,
    job: &Job,
    criteria: &ScoringCriteria,
) -> Vec<CriteriaScore> {
    criteria
        .iter()
        .map(|(key, criterion)| {
            let measurement = if criterion.enabled {
                measure(key, profile, job)
            } else {
                Measurement::Absent
            };
            score_criterion(key, criterion, measurement)
        })
        .collect()
}

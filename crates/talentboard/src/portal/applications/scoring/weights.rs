use serde::Serialize;

use super::super::domain::CriterionKey;
use super::criteria::ScoringCriteria;

/// Allowed drift between the enabled weight sum and 100.
pub const WEIGHT_TOLERANCE: f64 = 0.01;

/// Result of checking a rubric before it is accepted for storage.
///
/// `errors` block the save; `warnings` flag authoring inconsistencies
/// (max-points/band mismatches, unordered bands) that scoring tolerates.
#[derive(Debug, Clone, Serialize)]
pub struct WeightValidation {
    pub valid: bool,
    pub total_weight: f64,
    pub enabled: Vec<CriterionKey>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Sum the enabled criteria's weights and report whether they land on 100
/// within [`WEIGHT_TOLERANCE`].
///
/// Invoked whenever an administrator creates or edits a configuration;
/// deliberately NOT invoked on the scoring path, which falls back to the
/// system default instead of refusing to score (see the resolver).
pub fn validate_weights(criteria: &ScoringCriteria) -> WeightValidation {
    let enabled = criteria.enabled_keys();
    let total_weight: f64 = enabled
        .iter()
        .map(|key| criteria.criterion(*key).weight)
        .sum();

    let mut errors = Vec::new();
    let valid = (total_weight - 100.0).abs() < WEIGHT_TOLERANCE;
    if !valid {
        let listed = enabled
            .iter()
            .map(|key| {
                format!(
                    "{} ({:.2})",
                    key.label(),
                    criteria.criterion(*key).weight
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        errors.push(format!(
            "enabled criteria weights sum to {total_weight:.2}, expected 100 within {WEIGHT_TOLERANCE}: {listed}"
        ));
    }

    let mut warnings = Vec::new();
    for (key, criterion) in criteria.iter() {
        if !criterion.points_consistent() {
            let highest = criterion
                .sub_criteria
                .iter()
                .map(|band| band.points)
                .max()
                .unwrap_or(0);
            warnings.push(format!(
                "{}: max points {} does not equal highest band points {}",
                key.label(),
                criterion.max_points,
                highest
            ));
        }
        if criterion.enabled && !criterion.bands_well_formed() {
            warnings.push(format!(
                "{}: sub-criteria must be non-empty and ordered highest points first",
                key.label()
            ));
        }
    }

    WeightValidation {
        valid,
        total_weight,
        enabled,
        errors,
        warnings,
    }
}

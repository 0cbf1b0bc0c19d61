use serde::{Deserialize, Serialize};

use super::super::domain::{Company, CriterionKey, Job};
use super::criteria::ScoringCriteria;
use super::weights::validate_weights;

/// Which configuration layer produced the effective rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringSystemUsed {
    Default,
    CompanyCustom,
    JobCustom,
}

impl ScoringSystemUsed {
    pub const fn label(self) -> &'static str {
        match self {
            ScoringSystemUsed::Default => "default",
            ScoringSystemUsed::CompanyCustom => "company-custom",
            ScoringSystemUsed::JobCustom => "job-custom",
        }
    }
}

/// The effective rubric for a job plus its provenance tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedScoring {
    pub criteria: ScoringCriteria,
    pub source: ScoringSystemUsed,
}

/// Raised when a stored override resolves to a rubric that fails weight
/// validation. Never fatal: callers fall back to the system default and log
/// the anomaly so scoring is not blocked by a broken override.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScoringConfigError {
    #[error(
        "{} configuration invalid: enabled weights sum to {total_weight:.2}, expected 100",
        .source_tag.label()
    )]
    ConfigurationInvalid {
        source_tag: ScoringSystemUsed,
        total_weight: f64,
        enabled: Vec<CriterionKey>,
    },
}

/// Select the configuration that applies to `job`, first applicable wins:
/// job-level partial override merged over the system default, then the
/// company's full custom rubric, then the system default.
///
/// Pure function of its inputs; persistence stays with the caller.
pub fn resolve(
    job: &Job,
    company: &Company,
    system_default: &ScoringCriteria,
) -> Result<ResolvedScoring, ScoringConfigError> {
    let resolved = job
        .scoring
        .as_ref()
        .filter(|config| !config.use_company_default && !config.use_system_default)
        .and_then(|config| config.custom_scoring.as_ref())
        .filter(|overrides| !overrides.is_empty())
        .map(|overrides| ResolvedScoring {
            criteria: system_default.merged_with(overrides),
            source: ScoringSystemUsed::JobCustom,
        })
        .or_else(|| {
            company.custom_scoring.as_ref().map(|criteria| ResolvedScoring {
                criteria: criteria.clone(),
                source: ScoringSystemUsed::CompanyCustom,
            })
        })
        .unwrap_or_else(|| ResolvedScoring {
            criteria: system_default.clone(),
            source: ScoringSystemUsed::Default,
        });

    let report = validate_weights(&resolved.criteria);
    if !report.valid {
        return Err(ScoringConfigError::ConfigurationInvalid {
            source_tag: resolved.source,
            total_weight: report.total_weight,
            enabled: report.enabled,
        });
    }

    Ok(resolved)
}

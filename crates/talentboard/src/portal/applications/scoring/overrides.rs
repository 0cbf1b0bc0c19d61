use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::CriterionKey;
use super::criteria::{Criterion, ScoringCriteria, SubCriterion};

/// Sparse replacement for a single criterion: only populated fields replace
/// the base criterion's values during a merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionOverride {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub max_points: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sub_criteria: Option<Vec<SubCriterion>>,
}

impl CriterionOverride {
    fn apply(&self, base: &mut Criterion) {
        if let Some(label) = &self.label {
            base.label = label.clone();
        }
        if let Some(max_points) = self.max_points {
            base.max_points = max_points;
        }
        if let Some(weight) = self.weight {
            base.weight = weight;
        }
        if let Some(enabled) = self.enabled {
            base.enabled = enabled;
        }
        if let Some(description) = &self.description {
            base.description = description.clone();
        }
        if let Some(sub_criteria) = &self.sub_criteria {
            base.sub_criteria = sub_criteria.clone();
        }
    }
}

/// A sparse criterion-key → override map, the stored shape of job-level
/// custom scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringOverrides(pub BTreeMap<CriterionKey, CriterionOverride>);

impl ScoringOverrides {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn set(mut self, key: CriterionKey, override_: CriterionOverride) -> Self {
        self.0.insert(key, override_);
        self
    }
}

impl ScoringCriteria {
    /// Structural merge: produce a new configuration with the overrides
    /// applied on top of `self`. The base is never mutated.
    pub fn merged_with(&self, overrides: &ScoringOverrides) -> ScoringCriteria {
        let mut merged = self.clone();
        for (key, override_) in &overrides.0 {
            override_.apply(merged.criterion_mut(*key));
        }
        merged
    }
}

use serde::{Deserialize, Serialize};

use super::super::domain::{CriterionKey, EducationLevel, EligibilityTier, Measurement};

/// Qualifying condition for a sub-criterion band.
///
/// Bands carry an explicit typed predicate rather than inferring thresholds
/// from their display names, so similarly named tiers can never be confused
/// during matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BandRequirement {
    /// Measured quantity is at least this value (open-ended top tier).
    AtLeast(u32),
    /// Measured quantity falls in this closed range.
    Between(u32, u32),
    /// Declared education is at or above this level.
    EducationAtLeast(EducationLevel),
    /// Declared eligibility is at or above this tier.
    EligibilityAtLeast(EligibilityTier),
}

impl BandRequirement {
    /// Whether the measured value satisfies this band.
    ///
    /// `Absent` measurements and type mismatches never qualify.
    pub fn accepts(&self, measurement: &Measurement) -> bool {
        match (self, measurement) {
            (BandRequirement::AtLeast(min), Measurement::Quantity(value)) => value >= min,
            (BandRequirement::Between(low, high), Measurement::Quantity(value)) => {
                value >= low && value <= high
            }
            (BandRequirement::EducationAtLeast(level), Measurement::Education(held)) => {
                held >= level
            }
            (BandRequirement::EligibilityAtLeast(tier), Measurement::Eligibility(held)) => {
                held >= tier
            }
            _ => false,
        }
    }
}

/// A named point band within a criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCriterion {
    pub name: String,
    pub points: u32,
    pub description: String,
    pub requirement: BandRequirement,
}

impl SubCriterion {
    pub fn new(
        name: &str,
        points: u32,
        description: &str,
        requirement: BandRequirement,
    ) -> Self {
        Self {
            name: name.to_string(),
            points,
            description: description.to_string(),
            requirement,
        }
    }
}

/// One scoring dimension: point scale, weight share, and its ordered bands.
///
/// `sub_criteria` must be authored from highest points to lowest; matching
/// scans the list in order and the first qualifying tier wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub label: String,
    pub max_points: u32,
    pub weight: f64,
    pub enabled: bool,
    pub description: String,
    pub sub_criteria: Vec<SubCriterion>,
}

impl Criterion {
    /// First band (in authored, descending order) the measurement qualifies
    /// for. `None` when nothing qualifies or the list is empty.
    pub fn best_match(&self, measurement: &Measurement) -> Option<&SubCriterion> {
        self.sub_criteria
            .iter()
            .find(|band| band.requirement.accepts(measurement))
    }

    /// Whether the band list is non-empty and in descending-points order,
    /// the precondition for best-tier matching.
    pub fn bands_well_formed(&self) -> bool {
        !self.sub_criteria.is_empty()
            && self
                .sub_criteria
                .windows(2)
                .all(|pair| pair[0].points >= pair[1].points)
    }

    /// Whether `max_points` equals the highest band points. A mismatch is an
    /// authoring warning, not a runtime failure.
    pub fn points_consistent(&self) -> bool {
        self.sub_criteria
            .iter()
            .map(|band| band.points)
            .max()
            .map_or(true, |highest| highest == self.max_points)
    }
}

/// The full rubric: a fixed mapping of the eight criterion keys.
///
/// Values are immutable once accepted for use; company and job variants are
/// produced by [`merged_with`](ScoringCriteria::merged_with), never by
/// mutating a base in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriteria {
    pub education: Criterion,
    pub experience: Criterion,
    pub training: Criterion,
    pub eligibility: Criterion,
    pub skills: Criterion,
    pub awards: Criterion,
    pub relevant_experience: Criterion,
    pub certifications: Criterion,
}

impl ScoringCriteria {
    pub fn criterion(&self, key: CriterionKey) -> &Criterion {
        match key {
            CriterionKey::Education => &self.education,
            CriterionKey::Experience => &self.experience,
            CriterionKey::Training => &self.training,
            CriterionKey::Eligibility => &self.eligibility,
            CriterionKey::Skills => &self.skills,
            CriterionKey::Awards => &self.awards,
            CriterionKey::RelevantExperience => &self.relevant_experience,
            CriterionKey::Certifications => &self.certifications,
        }
    }

    pub(crate) fn criterion_mut(&mut self, key: CriterionKey) -> &mut Criterion {
        match key {
            CriterionKey::Education => &mut self.education,
            CriterionKey::Experience => &mut self.experience,
            CriterionKey::Training => &mut self.training,
            CriterionKey::Eligibility => &mut self.eligibility,
            CriterionKey::Skills => &mut self.skills,
            CriterionKey::Awards => &mut self.awards,
            CriterionKey::RelevantExperience => &mut self.relevant_experience,
            CriterionKey::Certifications => &mut self.certifications,
        }
    }

    /// All criteria in canonical rubric order.
    pub fn iter(&self) -> impl Iterator<Item = (CriterionKey, &Criterion)> + '_ {
        CriterionKey::ALL
            .into_iter()
            .map(|key| (key, self.criterion(key)))
    }

    pub fn enabled_keys(&self) -> Vec<CriterionKey> {
        self.iter()
            .filter(|(_, criterion)| criterion.enabled)
            .map(|(key, _)| key)
            .collect()
    }

    /// Sum of `max_points` over enabled criteria: the "out of N points"
    /// figure shown by display surfaces without re-running a scoring pass.
    pub fn max_possible_score(&self) -> u32 {
        self.iter()
            .filter(|(_, criterion)| criterion.enabled)
            .map(|(_, criterion)| criterion.max_points)
            .sum()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::domain::CriterionKey;
use super::resolver::ScoringSystemUsed;

/// Per-criterion result inside a breakdown. Owned exclusively by the
/// [`PdsScoreBreakdown`] that contains it; never persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaScore {
    pub key: CriterionKey,
    pub label: String,
    pub earned_points: u32,
    pub max_points: u32,
    pub weight: f64,
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_criteria: Option<String>,
    pub details: String,
    pub enabled: bool,
}

/// Qualitative band for a total match percentage, used by list surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Excellent,
    Strong,
    Moderate,
    Limited,
    Minimal,
}

impl MatchBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 85.0 {
            MatchBand::Excellent
        } else if percentage >= 70.0 {
            MatchBand::Strong
        } else if percentage >= 50.0 {
            MatchBand::Moderate
        } else if percentage >= 25.0 {
            MatchBand::Limited
        } else {
            MatchBand::Minimal
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchBand::Excellent => "Excellent match",
            MatchBand::Strong => "Strong match",
            MatchBand::Moderate => "Moderate match",
            MatchBand::Limited => "Limited match",
            MatchBand::Minimal => "Minimal match",
        }
    }
}

/// The full score record attached to an application.
///
/// Immutable once attached; rescoring after a profile or rubric change
/// supersedes the stored value rather than mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdsScoreBreakdown {
    pub total_score: u32,
    pub max_possible_score: u32,
    pub percentage: f64,
    pub criteria_scores: Vec<CriteriaScore>,
    pub scoring_system_used: ScoringSystemUsed,
    pub applied_date: DateTime<Utc>,
}

impl PdsScoreBreakdown {
    /// Aggregate per-criterion results into the persisted record. Disabled
    /// criteria stay in `criteria_scores` but are excluded from both sums;
    /// an all-disabled rubric yields a zero percentage, not a division
    /// error.
    pub fn assemble(
        criteria_scores: Vec<CriteriaScore>,
        scoring_system_used: ScoringSystemUsed,
        applied_date: DateTime<Utc>,
    ) -> Self {
        let enabled = criteria_scores.iter().filter(|score| score.enabled);
        let (total_score, max_possible_score) =
            enabled.fold((0u32, 0u32), |(earned, max), score| {
                (earned + score.earned_points, max + score.max_points)
            });

        let percentage = if max_possible_score == 0 {
            0.0
        } else {
            f64::from(total_score) / f64::from(max_possible_score) * 100.0
        };

        Self {
            total_score,
            max_possible_score,
            percentage,
            criteria_scores,
            scoring_system_used,
            applied_date,
        }
    }

    pub fn band(&self) -> MatchBand {
        MatchBand::from_percentage(self.percentage)
    }

    /// One-line summary for list views and logs.
    pub fn summary(&self) -> String {
        format!(
            "{:.1}% match ({} of {} points, {} rubric)",
            self.percentage,
            self.total_score,
            self.max_possible_score,
            self.scoring_system_used.label()
        )
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::scoring::{ScoringCriteria, ScoringOverrides};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for employer companies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// Identifier wrapper for applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The eight dimensions a PDS profile is scored on.
///
/// Variant order matches the canonical rubric layout so breakdowns render in
/// a stable sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CriterionKey {
    Education,
    Experience,
    Training,
    Eligibility,
    Skills,
    Awards,
    RelevantExperience,
    Certifications,
}

impl CriterionKey {
    pub const ALL: [CriterionKey; 8] = [
        CriterionKey::Education,
        CriterionKey::Experience,
        CriterionKey::Training,
        CriterionKey::Eligibility,
        CriterionKey::Skills,
        CriterionKey::Awards,
        CriterionKey::RelevantExperience,
        CriterionKey::Certifications,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CriterionKey::Education => "Education",
            CriterionKey::Experience => "Work Experience",
            CriterionKey::Training => "Training",
            CriterionKey::Eligibility => "Civil Service Eligibility",
            CriterionKey::Skills => "Skills",
            CriterionKey::Awards => "Awards & Recognition",
            CriterionKey::RelevantExperience => "Relevant Experience",
            CriterionKey::Certifications => "Certifications",
        }
    }
}

/// Highest educational attainment declared on a PDS, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EducationLevel {
    Elementary,
    HighSchool,
    Vocational,
    Bachelors,
    Masters,
    Doctorate,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::Elementary => "Elementary",
            EducationLevel::HighSchool => "High School Graduate",
            EducationLevel::Vocational => "Vocational Course",
            EducationLevel::Bachelors => "Bachelor's Degree",
            EducationLevel::Masters => "Master's Degree",
            EducationLevel::Doctorate => "Doctorate Degree",
        }
    }
}

/// Civil-service eligibility tiers, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EligibilityTier {
    Subprofessional,
    Professional,
    BoardOrBar,
}

impl EligibilityTier {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityTier::Subprofessional => "CS Subprofessional",
            EligibilityTier::Professional => "CS Professional",
            EligibilityTier::BoardOrBar => "Board/Bar Passer",
        }
    }
}

/// One applicant-side value a criterion can be measured against.
///
/// `Absent` (or a type mismatch against a band's requirement) never
/// qualifies for any band; the criterion simply earns zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measurement {
    Quantity(u32),
    Education(EducationLevel),
    Eligibility(EligibilityTier),
    Absent,
}

/// One employment entry from the PDS work-history section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub position: String,
    pub employer: String,
    pub category: String,
    pub years: u32,
}

/// A learning-and-development entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    pub title: String,
    pub provider: String,
    pub hours: u32,
}

/// A recognition entry from the PDS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub title: String,
    pub conferred_by: String,
}

/// A professional certification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

/// The parsed Personal Data Sheet the scoring engine consumes.
///
/// Parsing/OCR of the uploaded document happens upstream; this is the
/// structured result. `measured` carries pre-extracted measurements which,
/// when present for a criterion, take precedence over field derivation.
/// This is the hook for domain-specific classifiers (e.g.
/// relevant-experience tagging) that run outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdsProfile {
    pub applicant_id: ApplicantId,
    pub highest_education: Option<EducationLevel>,
    pub work_history: Vec<WorkExperience>,
    pub trainings: Vec<TrainingRecord>,
    pub eligibility: Option<EligibilityTier>,
    pub skills: Vec<String>,
    pub awards: Vec<Award>,
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub measured: BTreeMap<CriterionKey, Measurement>,
}

impl PdsProfile {
    pub fn total_experience_years(&self) -> u32 {
        self.work_history.iter().map(|entry| entry.years).sum()
    }

    /// Years of experience in the given job category, case-insensitive.
    pub fn relevant_experience_years(&self, category: &str) -> u32 {
        self.work_history
            .iter()
            .filter(|entry| entry.category.trim().eq_ignore_ascii_case(category.trim()))
            .map(|entry| entry.years)
            .sum()
    }

    /// Count of declared skills that appear in the job's required list.
    ///
    /// A job with no required skills listed measures against the full
    /// declared skill set.
    pub fn matching_skill_count(&self, required: &[String]) -> u32 {
        if required.is_empty() {
            return self.skills.len() as u32;
        }

        self.skills
            .iter()
            .filter(|skill| {
                required
                    .iter()
                    .any(|wanted| wanted.trim().eq_ignore_ascii_case(skill.trim()))
            })
            .count() as u32
    }
}

/// Per-job scoring preferences stored alongside the posting.
///
/// `use_company_default`/`use_system_default` let an employer retire a
/// stored override without deleting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobScoringConfig {
    #[serde(default)]
    pub use_company_default: bool,
    #[serde(default)]
    pub use_system_default: bool,
    #[serde(default)]
    pub custom_scoring: Option<ScoringOverrides>,
}

/// A job posting as stored by the job/company collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub company_id: CompanyId,
    pub title: String,
    pub category: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub scoring: Option<JobScoringConfig>,
}

/// An employer record, optionally carrying a company-wide scoring rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default)]
    pub custom_scoring: Option<ScoringCriteria>,
}

/// High level status tracked throughout the application workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    Screening,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Screening => "screening",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }
}

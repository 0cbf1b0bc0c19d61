use super::super::domain::{EducationLevel, EligibilityTier};
use super::criteria::{BandRequirement, Criterion, ScoringCriteria, SubCriterion};

/// The immutable system-default rubric, created once at process start.
///
/// Weight shares and point ceilings are deliberately separate axes (both
/// sum to 100 across the enabled set, but per criterion they can differ:
/// experience caps at 25 points on a 20% weight share). Bands are authored
/// highest tier first; matching depends on that order.
impl ScoringCriteria {
    pub fn system_default() -> Self {
        Self {
            education: Criterion {
                label: "Education".to_string(),
                max_points: 20,
                weight: 20.0,
                enabled: true,
                description: "Highest educational attainment declared on the PDS".to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "Doctorate Degree",
                        20,
                        "Completed doctoral studies",
                        BandRequirement::EducationAtLeast(EducationLevel::Doctorate),
                    ),
                    SubCriterion::new(
                        "Master's Degree",
                        18,
                        "Completed graduate studies",
                        BandRequirement::EducationAtLeast(EducationLevel::Masters),
                    ),
                    SubCriterion::new(
                        "Bachelor's Degree",
                        15,
                        "Completed a four-year course",
                        BandRequirement::EducationAtLeast(EducationLevel::Bachelors),
                    ),
                    SubCriterion::new(
                        "Vocational Course",
                        10,
                        "Completed technical-vocational training",
                        BandRequirement::EducationAtLeast(EducationLevel::Vocational),
                    ),
                    SubCriterion::new(
                        "High School Graduate",
                        5,
                        "Completed secondary education",
                        BandRequirement::EducationAtLeast(EducationLevel::HighSchool),
                    ),
                ],
            },
            experience: Criterion {
                label: "Work Experience".to_string(),
                max_points: 25,
                weight: 20.0,
                enabled: true,
                description: "Total years of employment across the work-history section"
                    .to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "10+ years",
                        25,
                        "Ten or more years of employment",
                        BandRequirement::AtLeast(10),
                    ),
                    SubCriterion::new(
                        "7-9 years",
                        20,
                        "Seven to nine years of employment",
                        BandRequirement::Between(7, 9),
                    ),
                    SubCriterion::new(
                        "4-6 years",
                        15,
                        "Four to six years of employment",
                        BandRequirement::Between(4, 6),
                    ),
                    SubCriterion::new(
                        "1-3 years",
                        8,
                        "One to three years of employment",
                        BandRequirement::Between(1, 3),
                    ),
                ],
            },
            training: Criterion {
                label: "Training".to_string(),
                max_points: 10,
                weight: 10.0,
                enabled: true,
                description: "Learning and development programs attended".to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "5+ trainings",
                        10,
                        "Five or more programs attended",
                        BandRequirement::AtLeast(5),
                    ),
                    SubCriterion::new(
                        "3-4 trainings",
                        7,
                        "Three or four programs attended",
                        BandRequirement::Between(3, 4),
                    ),
                    SubCriterion::new(
                        "1-2 trainings",
                        4,
                        "One or two programs attended",
                        BandRequirement::Between(1, 2),
                    ),
                ],
            },
            eligibility: Criterion {
                label: "Civil Service Eligibility".to_string(),
                max_points: 15,
                weight: 15.0,
                enabled: true,
                description: "Highest civil-service eligibility held".to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "Board/Bar Passer",
                        15,
                        "Licensure board or bar examination passer",
                        BandRequirement::EligibilityAtLeast(EligibilityTier::BoardOrBar),
                    ),
                    SubCriterion::new(
                        "CS Professional",
                        12,
                        "Career service professional eligibility",
                        BandRequirement::EligibilityAtLeast(EligibilityTier::Professional),
                    ),
                    SubCriterion::new(
                        "CS Subprofessional",
                        8,
                        "Career service subprofessional eligibility",
                        BandRequirement::EligibilityAtLeast(EligibilityTier::Subprofessional),
                    ),
                ],
            },
            skills: Criterion {
                label: "Skills".to_string(),
                max_points: 10,
                weight: 15.0,
                enabled: true,
                description: "Declared skills matching the posting's requirements".to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "Expert (5+ skills)",
                        10,
                        "Five or more matching skills",
                        BandRequirement::AtLeast(5),
                    ),
                    SubCriterion::new(
                        "Advanced (3-4 skills)",
                        8,
                        "Three or four matching skills",
                        BandRequirement::Between(3, 4),
                    ),
                    SubCriterion::new(
                        "Intermediate (2 skills)",
                        4,
                        "Two matching skills",
                        BandRequirement::Between(2, 2),
                    ),
                    SubCriterion::new(
                        "Basic (1 skill)",
                        2,
                        "One matching skill",
                        BandRequirement::Between(1, 1),
                    ),
                ],
            },
            awards: Criterion {
                label: "Awards & Recognition".to_string(),
                max_points: 5,
                weight: 5.0,
                enabled: true,
                description: "Distinctions and recognition received".to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "3+ awards",
                        5,
                        "Three or more distinctions",
                        BandRequirement::AtLeast(3),
                    ),
                    SubCriterion::new(
                        "1-2 awards",
                        3,
                        "One or two distinctions",
                        BandRequirement::Between(1, 2),
                    ),
                    SubCriterion::new("None", 0, "No distinctions", BandRequirement::Between(0, 0)),
                ],
            },
            relevant_experience: Criterion {
                label: "Relevant Experience".to_string(),
                max_points: 10,
                weight: 10.0,
                enabled: true,
                description: "Years of experience in the posting's own category".to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "5+ years relevant",
                        10,
                        "Five or more years in the posting's field",
                        BandRequirement::AtLeast(5),
                    ),
                    SubCriterion::new(
                        "3-4 years relevant",
                        7,
                        "Three or four years in the posting's field",
                        BandRequirement::Between(3, 4),
                    ),
                    SubCriterion::new(
                        "1-2 years relevant",
                        4,
                        "One or two years in the posting's field",
                        BandRequirement::Between(1, 2),
                    ),
                    SubCriterion::new(
                        "Not Relevant",
                        0,
                        "No experience in the posting's field",
                        BandRequirement::Between(0, 0),
                    ),
                ],
            },
            certifications: Criterion {
                label: "Certifications".to_string(),
                max_points: 5,
                weight: 5.0,
                enabled: true,
                description: "Professional certifications held".to_string(),
                sub_criteria: vec![
                    SubCriterion::new(
                        "3+ certifications",
                        5,
                        "Three or more certifications",
                        BandRequirement::AtLeast(3),
                    ),
                    SubCriterion::new(
                        "2 certifications",
                        4,
                        "Two certifications",
                        BandRequirement::Between(2, 2),
                    ),
                    SubCriterion::new(
                        "1 certification",
                        3,
                        "A single certification",
                        BandRequirement::Between(1, 1),
                    ),
                ],
            },
        }
    }
}

//! Inputs accepted by the AI text-generation endpoints.

use serde::Serialize;

use crate::validation::fields::Fields;
use crate::validation::schema::Schema;
use crate::validation::sections::{Educations, Skills, WorkExperiences};
use crate::validation::violation::Violations;

/// Minimum length of a free-text work experience description, in UTF-16 code units.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Free-text description of a job to be turned into a work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateWorkExperienceInput {
    pub description: String,
}

impl Schema for GenerateWorkExperienceInput {
    const NAME: &'static str = "generateWorkExperience";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            description: fields
                .required_string("description", MIN_DESCRIPTION_LEN, violations)
                .unwrap_or_default(),
        }
    }
}

/// Context for generating a professional summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(flatten)]
    pub work_experience: WorkExperiences,
    #[serde(flatten)]
    pub education: Educations,
    #[serde(flatten)]
    pub skills: Skills,
}

impl Schema for GenerateSummaryInput {
    const NAME: &'static str = "generateSummary";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            job_title: fields.optional_string("jobTitle", violations),
            work_experience: WorkExperiences::parse_fields(fields, violations),
            education: Educations::parse_fields(fields, violations),
            skills: Skills::parse_fields(fields, violations),
        }
    }
}

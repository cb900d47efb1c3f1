//! Section schemas: one per topical group of the resume editor.

use serde::{Deserialize, Serialize};

use crate::validation::fields::Fields;
use crate::validation::photo::FileAttachment;
use crate::validation::schema::Schema;
use crate::validation::violation::Violations;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema for GeneralInfo {
    const NAME: &'static str = "generalInfo";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            title: fields.optional_string("title", violations),
            description: fields.optional_string("description", violations),
        }
    }
}

/// Personal info minus the photo. Stored resumes keep these fields and swap
/// the uploaded photo for a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Schema for ContactDetails {
    const NAME: &'static str = "contactDetails";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            first_name: fields.optional_string("firstName", violations),
            last_name: fields.optional_string("lastName", violations),
            job_title: fields.optional_string("jobTitle", violations),
            city: fields.optional_string("city", violations),
            country: fields.optional_string("country", violations),
            phone: fields.optional_string("phone", violations),
            email: fields.optional_string("email", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<FileAttachment>,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

impl Schema for PersonalInfo {
    const NAME: &'static str = "personalInfo";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            photo: fields.photo("photo", violations),
            contact: ContactDetails::parse_fields(fields, violations),
        }
    }
}

/// One job in the work experience list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema for WorkExperience {
    const NAME: &'static str = "workExperienceEntry";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            position: fields.optional_string("position", violations),
            company: fields.optional_string("company", violations),
            start_date: fields.optional_string("startDate", violations),
            end_date: fields.optional_string("endDate", violations),
            description: fields.optional_string("description", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperiences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experiences: Option<Vec<WorkExperience>>,
}

impl Schema for WorkExperiences {
    const NAME: &'static str = "workExperience";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            work_experiences: fields.entries("workExperiences", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Schema for Education {
    const NAME: &'static str = "educationEntry";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            degree: fields.optional_string("degree", violations),
            school: fields.optional_string("school", violations),
            start_date: fields.optional_string("startDate", violations),
            end_date: fields.optional_string("endDate", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Educations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educations: Option<Vec<Education>>,
}

impl Schema for Educations {
    const NAME: &'static str = "education";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            educations: fields.entries("educations", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl Schema for Skills {
    const NAME: &'static str = "skills";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            skills: fields.string_list("skills", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Languages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl Schema for Languages {
    const NAME: &'static str = "languages";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            languages: fields.string_list("languages", violations),
        }
    }
}

/// A professional reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_description: Option<String>,
}

impl Schema for Reference {
    const NAME: &'static str = "referenceEntry";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            reference_first_name: fields.optional_string("referenceFirstName", violations),
            reference_last_name: fields.optional_string("referenceLastName", violations),
            reference_job_title: fields.optional_string("referenceJobTitle", violations),
            reference_company_name: fields.optional_string("referenceCompanyName", violations),
            reference_address: fields.optional_string("referenceAddress", violations),
            reference_phone: fields.optional_string("referencePhone", violations),
            reference_email: fields.optional_string("referenceEmail", violations),
            reference_description: fields.optional_string("referenceDescription", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct References {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

impl Schema for References {
    const NAME: &'static str = "references";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            references: fields.entries("references", violations),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Schema for Summary {
    const NAME: &'static str = "summary";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        Self {
            summary: fields.optional_string("summary", violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::photo::{FileAttachment, MAX_PHOTO_BYTES};
    use crate::validation::schema::RawInput;
    use serde_json::json;

    #[test]
    fn test_general_info_trims() {
        let info = GeneralInfo::validate_value(json!({
            "title": "  My resume ",
            "description": ""
        }))
        .unwrap();
        assert_eq!(info.title.as_deref(), Some("My resume"));
        assert_eq!(info.description.as_deref(), Some(""));
    }

    #[test]
    fn test_general_info_trims_like_the_browser() {
        let info = GeneralInfo::validate_value(json!({
            "title": "\u{FEFF}CV\u{FEFF}",
            "description": "\u{0085}x\u{0085}"
        }))
        .unwrap();
        assert_eq!(info.title.as_deref(), Some("CV"));
        assert_eq!(info.description.as_deref(), Some("\u{0085}x\u{0085}"));
    }

    #[test]
    fn test_general_info_empty_object() {
        assert_eq!(GeneralInfo::validate_value(json!({})).unwrap(), GeneralInfo::default());
    }

    #[test]
    fn test_non_object_root() {
        let err = Summary::validate_value(json!(["summary"])).unwrap_err();
        assert_eq!(err.messages_at(""), vec!["Expected object, received array"]);
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_unknown_keys_dropped() {
        let summary = Summary::validate_value(json!({ "summary": "x", "extra": 1 })).unwrap();
        assert_eq!(serde_json::to_value(&summary).unwrap(), json!({ "summary": "x" }));
    }

    #[test]
    fn test_personal_info_with_photo() {
        let input = RawInput::new(json!({ "firstName": " Ada ", "email": "ada@example.com" }))
            .with_file("photo", FileAttachment::new("image/png", vec![0u8; 128]));
        let info = PersonalInfo::validate(&input).unwrap();
        assert_eq!(info.contact.first_name.as_deref(), Some("Ada"));
        assert_eq!(info.photo.map(|p| p.size()), Some(128));
    }

    #[test]
    fn test_personal_info_oversized_photo() {
        let input = RawInput::new(json!({}))
            .with_file("photo", FileAttachment::new("image/png", vec![0u8; MAX_PHOTO_BYTES + 1]));
        let err = PersonalInfo::validate(&input).unwrap_err();
        assert_eq!(err.messages_at("photo"), vec!["File must be less than 4MB"]);
    }

    #[test]
    fn test_personal_info_email_not_format_checked() {
        let info = PersonalInfo::validate_value(json!({ "email": "not an email" })).unwrap();
        assert_eq!(info.contact.email.as_deref(), Some("not an email"));
    }

    #[test]
    fn test_work_experiences_absent_is_valid() {
        let section = WorkExperiences::validate_value(json!({})).unwrap();
        assert_eq!(section.work_experiences, None);
    }

    #[test]
    fn test_work_experience_dates_not_ordered() {
        let section = WorkExperiences::validate_value(json!({
            "workExperiences": [{ "startDate": "2024-01-01", "endDate": "2020-01-01" }]
        }))
        .unwrap();
        assert_eq!(section.work_experiences.unwrap().len(), 1);
    }

    #[test]
    fn test_education_collects_single_sibling_failure() {
        let err = Educations::validate_value(json!({
            "educations": [
                { "degree": "BSc", "school": "MIT", "startDate": "2010", "endDate": "2014" },
                { "degree": "MSc", "startDate": 2015 }
            ]
        }))
        .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(
            err.messages_at("educations[1].startDate"),
            vec!["Expected string, received number"]
        );
    }

    #[test]
    fn test_entries_collect_across_siblings() {
        let err = WorkExperiences::validate_value(json!({
            "workExperiences": [
                { "company": 1 },
                "not an entry",
                { "position": "Engineer" },
                { "endDate": false }
            ]
        }))
        .unwrap_err();
        let paths: Vec<String> = err.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "workExperiences[0].company",
                "workExperiences[1]",
                "workExperiences[3].endDate"
            ]
        );
        assert_eq!(
            err.messages_at("workExperiences[1]"),
            vec!["Expected object, received string"]
        );
    }

    #[test]
    fn test_skills_and_languages_are_distinct_fields() {
        let input = json!({ "skills": ["Rust"], "languages": ["French"] });
        let skills = Skills::validate_value(input.clone()).unwrap();
        let languages = Languages::validate_value(input).unwrap();
        assert_eq!(skills.skills, Some(vec!["Rust".to_string()]));
        assert_eq!(languages.languages, Some(vec!["French".to_string()]));
    }

    #[test]
    fn test_references_camel_case_keys() {
        let section = References::validate_value(json!({
            "references": [{
                "referenceFirstName": " Grace ",
                "referenceCompanyName": "Navy",
                "referenceEmail": "grace@example.com"
            }]
        }))
        .unwrap();
        let reference = &section.references.as_ref().unwrap()[0];
        assert_eq!(reference.reference_first_name.as_deref(), Some("Grace"));
        assert_eq!(
            serde_json::to_value(&section).unwrap(),
            json!({ "references": [{
                "referenceFirstName": "Grace",
                "referenceCompanyName": "Navy",
                "referenceEmail": "grace@example.com"
            }]})
        );
    }

    #[test]
    fn test_references_null_list_rejected() {
        let err = References::validate_value(json!({ "references": null })).unwrap_err();
        assert_eq!(err.messages_at("references"), vec!["Expected array, received null"]);
    }
}

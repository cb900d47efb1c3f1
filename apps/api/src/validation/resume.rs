//! The aggregate resume schema and the typed record handed to persistence.

use serde::{Deserialize, Serialize};

use crate::validation::fields::Fields;
use crate::validation::photo::{FileAttachment, Photo};
use crate::validation::schema::Schema;
use crate::validation::sections::{
    ContactDetails, Educations, GeneralInfo, Languages, PersonalInfo, References, Skills, Summary,
    WorkExperiences,
};
use crate::validation::violation::Violations;

/// Every resume field except the photo. Shared by the validated form
/// payload and the stored record, which differ only in how the photo is held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeContent {
    #[serde(flatten)]
    pub general: GeneralInfo,
    #[serde(flatten)]
    pub contact: ContactDetails,
    #[serde(flatten)]
    pub work_experience: WorkExperiences,
    #[serde(flatten)]
    pub education: Educations,
    #[serde(flatten)]
    pub skills: Skills,
    #[serde(flatten)]
    pub languages: Languages,
    #[serde(flatten)]
    pub references: References,
    #[serde(flatten)]
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
}

/// Output of the resume schema: the union of all section schemas plus the
/// two styling fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<FileAttachment>,
    #[serde(flatten)]
    pub content: ResumeContent,
}

impl Schema for Resume {
    const NAME: &'static str = "resume";

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self {
        let general = GeneralInfo::parse_fields(fields, violations);
        let PersonalInfo { photo, contact } = PersonalInfo::parse_fields(fields, violations);

        Self {
            photo,
            content: ResumeContent {
                general,
                contact,
                work_experience: WorkExperiences::parse_fields(fields, violations),
                education: Educations::parse_fields(fields, violations),
                skills: Skills::parse_fields(fields, violations),
                languages: Languages::parse_fields(fields, violations),
                references: References::parse_fields(fields, violations),
                summary: Summary::parse_fields(fields, violations),
                color_hex: fields.optional_string("colorHex", violations),
                border_style: fields.optional_string("borderStyle", violations),
            },
        }
    }
}

/// A resume record as the editor and persistence layer see it: optionally
/// identified, with a photo that is an upload, a stored URL, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub photo: Photo,
    #[serde(flatten)]
    pub content: ResumeContent,
}

impl ResumeValues {
    pub fn from_validated(resume: Resume, id: Option<String>) -> Self {
        Self {
            id,
            photo: Photo::from(resume.photo),
            content: resume.content,
        }
    }

    /// Replaces the photo with the URL it was stored under.
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo = Photo::Url(url.into());
        self
    }

    pub fn without_photo(mut self) -> Self {
        self.photo = Photo::None;
        self
    }
}

impl From<Resume> for ResumeValues {
    fn from(resume: Resume) -> Self {
        Self::from_validated(resume, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::photo::MAX_PHOTO_BYTES;
    use crate::validation::schema::RawInput;
    use serde_json::{json, Value};

    fn full_payload() -> Value {
        json!({
            "title": "Backend resume",
            "description": "For platform roles",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "jobTitle": "Engineer",
            "city": "London",
            "country": "UK",
            "phone": "+44 20 0000 0000",
            "email": "ada@example.com",
            "workExperiences": [{
                "position": "Analyst",
                "company": "Analytical Engines Ltd",
                "startDate": "1842-01-01",
                "endDate": "1843-01-01",
                "description": "Wrote the first published algorithm"
            }],
            "educations": [{
                "degree": "Mathematics",
                "school": "Home tutoring",
                "startDate": "1830-01-01",
                "endDate": "1835-01-01"
            }],
            "skills": ["Mathematics", "Poetry"],
            "languages": ["English", "French"],
            "references": [{
                "referenceFirstName": "Charles",
                "referenceLastName": "Babbage",
                "referenceJobTitle": "Inventor",
                "referenceCompanyName": "Difference Engine",
                "referenceAddress": "Dorset Street",
                "referencePhone": "1",
                "referenceEmail": "charles@example.com",
                "referenceDescription": "Collaborator"
            }],
            "summary": "Pioneer of computing",
            "colorHex": "#000000",
            "borderStyle": "squircle"
        })
    }

    #[test]
    fn test_full_payload_round_trips() {
        let payload = full_payload();
        let resume = Resume::validate_value(payload.clone()).unwrap();
        assert_eq!(serde_json::to_value(&resume).unwrap(), payload);
    }

    #[test]
    fn test_full_payload_round_trips_modulo_trim() {
        let mut padded = full_payload();
        padded["firstName"] = json!("  Ada  ");
        padded["skills"] = json!([" Mathematics ", "Poetry\t"]);
        padded["workExperiences"][0]["company"] = json!("\nAnalytical Engines Ltd ");
        let resume = Resume::validate_value(padded).unwrap();
        assert_eq!(serde_json::to_value(&resume).unwrap(), full_payload());
    }

    #[test]
    fn test_empty_object_is_valid() {
        assert_eq!(Resume::validate_value(json!({})).unwrap(), Resume::default());
    }

    #[test]
    fn test_violations_from_every_section() {
        let err = Resume::validate_value(json!({
            "title": 1,
            "email": null,
            "workExperiences": [{ "startDate": [] }],
            "skills": "Rust",
            "references": [{}, { "referencePhone": 5 }],
            "colorHex": false
        }))
        .unwrap_err();
        let paths: Vec<String> = err.iter().map(|v| v.path.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "title",
                "email",
                "workExperiences[0].startDate",
                "skills",
                "references[1].referencePhone",
                "colorHex"
            ]
        );
    }

    #[test]
    fn test_photo_rules_apply_to_resume() {
        let input = RawInput::new(full_payload())
            .with_file("photo", FileAttachment::new("application/pdf", vec![0u8; 8]));
        let err = Resume::validate(&input).unwrap_err();
        assert_eq!(err.messages_at("photo"), vec!["Must be an image file"]);
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_photo_at_limit_accepted() {
        let input = RawInput::new(json!({}))
            .with_file("photo", FileAttachment::new("image/jpeg", vec![0u8; MAX_PHOTO_BYTES]));
        let resume = Resume::validate(&input).unwrap();
        assert_eq!(resume.photo.map(|p| p.size()), Some(MAX_PHOTO_BYTES));
    }

    #[test]
    fn test_values_photo_transitions() {
        let input = RawInput::new(json!({ "firstName": "Ada" }))
            .with_file("photo", FileAttachment::new("image/png", vec![0u8; 4]));
        let resume = Resume::validate(&input).unwrap();

        let values = ResumeValues::from_validated(resume, Some("resume-1".to_string()));
        assert!(values.photo.upload().is_some());

        let stored = values.with_photo_url("https://cdn.example.com/resume-1.png");
        assert_eq!(stored.photo.url(), Some("https://cdn.example.com/resume-1.png"));
        assert_eq!(stored.content.contact.first_name.as_deref(), Some("Ada"));

        assert!(stored.without_photo().photo.is_none());
    }

    #[test]
    fn test_values_serialize_stored_record() {
        let resume = Resume::validate_value(json!({ "title": "CV", "skills": ["Rust"] })).unwrap();
        let values = ResumeValues::from_validated(resume, Some("abc".to_string()))
            .with_photo_url("https://cdn.example.com/p.png");
        assert_eq!(
            serde_json::to_value(&values).unwrap(),
            json!({
                "id": "abc",
                "photo": "https://cdn.example.com/p.png",
                "title": "CV",
                "skills": ["Rust"]
            })
        );
    }

    #[test]
    fn test_values_deserialize_stored_record() {
        let values: ResumeValues = serde_json::from_value(json!({
            "id": "abc",
            "photo": null,
            "summary": "Hello",
            "educations": [{ "school": "MIT" }]
        }))
        .unwrap();
        assert_eq!(values.id.as_deref(), Some("abc"));
        assert!(values.photo.is_none());
        assert_eq!(values.content.summary.summary.as_deref(), Some("Hello"));
        let educations = values.content.education.educations.unwrap();
        assert_eq!(educations[0].school.as_deref(), Some("MIT"));
    }
}

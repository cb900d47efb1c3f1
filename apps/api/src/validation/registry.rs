//! Lookup of schemas by name, for callers that only know the schema at runtime.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::validation::generation::{GenerateSummaryInput, GenerateWorkExperienceInput};
use crate::validation::resume::Resume;
use crate::validation::schema::{RawInput, Schema};
use crate::validation::sections::{
    Educations, GeneralInfo, Languages, PersonalInfo, References, Skills, Summary, WorkExperiences,
};
use crate::validation::violation::Violations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaName {
    GeneralInfo,
    PersonalInfo,
    WorkExperience,
    Education,
    Skills,
    Summary,
    Languages,
    References,
    Resume,
    GenerateWorkExperience,
    GenerateSummary,
}

impl SchemaName {
    pub const ALL: [SchemaName; 11] = [
        SchemaName::GeneralInfo,
        SchemaName::PersonalInfo,
        SchemaName::WorkExperience,
        SchemaName::Education,
        SchemaName::Skills,
        SchemaName::Summary,
        SchemaName::Languages,
        SchemaName::References,
        SchemaName::Resume,
        SchemaName::GenerateWorkExperience,
        SchemaName::GenerateSummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaName::GeneralInfo => GeneralInfo::NAME,
            SchemaName::PersonalInfo => PersonalInfo::NAME,
            SchemaName::WorkExperience => WorkExperiences::NAME,
            SchemaName::Education => Educations::NAME,
            SchemaName::Skills => Skills::NAME,
            SchemaName::Summary => Summary::NAME,
            SchemaName::Languages => Languages::NAME,
            SchemaName::References => References::NAME,
            SchemaName::Resume => Resume::NAME,
            SchemaName::GenerateWorkExperience => GenerateWorkExperienceInput::NAME,
            SchemaName::GenerateSummary => GenerateSummaryInput::NAME,
        }
    }

    /// Whether the schema reads an uploaded photo.
    pub fn accepts_uploads(&self) -> bool {
        matches!(self, SchemaName::PersonalInfo | SchemaName::Resume)
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchemaName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown schema '{0}'")]
pub struct UnknownSchema(pub String);

impl FromStr for SchemaName {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownSchema(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Invalid(#[from] Violations),

    #[error("Failed to serialize validated value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Validates `input` against the named schema and returns the normalized
/// value as JSON.
pub fn validate_named(name: SchemaName, input: &RawInput) -> Result<Value, RegistryError> {
    match name {
        SchemaName::GeneralInfo => to_json::<GeneralInfo>(input),
        SchemaName::PersonalInfo => to_json::<PersonalInfo>(input),
        SchemaName::WorkExperience => to_json::<WorkExperiences>(input),
        SchemaName::Education => to_json::<Educations>(input),
        SchemaName::Skills => to_json::<Skills>(input),
        SchemaName::Summary => to_json::<Summary>(input),
        SchemaName::Languages => to_json::<Languages>(input),
        SchemaName::References => to_json::<References>(input),
        SchemaName::Resume => to_json::<Resume>(input),
        SchemaName::GenerateWorkExperience => to_json::<GenerateWorkExperienceInput>(input),
        SchemaName::GenerateSummary => to_json::<GenerateSummaryInput>(input),
    }
}

fn to_json<T: Schema + Serialize>(input: &RawInput) -> Result<Value, RegistryError> {
    let value = T::validate(input)?;
    Ok(serde_json::to_value(value)?)
}

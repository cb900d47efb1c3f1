//! Schema registry for resume editor input.
//!
//! Every schema turns raw input into a typed, trimmed value or an ordered
//! list of violations. Validation is pure: no I/O, no logging, no shared
//! state. Section schemas are leaves; `Resume` and the generation inputs are
//! built by calling the section schemas on the same object, so a rule
//! changed in one section applies everywhere that section is embedded.

pub mod fields;
pub mod generation;
pub mod photo;
pub mod registry;
pub mod resume;
pub mod schema;
pub mod sections;
pub mod violation;

pub use generation::{GenerateSummaryInput, GenerateWorkExperienceInput};
pub use photo::{FileAttachment, Photo, MAX_PHOTO_BYTES};
pub use registry::{validate_named, RegistryError, SchemaName, UnknownSchema};
pub use resume::{Resume, ResumeContent, ResumeValues};
pub use schema::{RawInput, Schema};
pub use sections::{
    ContactDetails, Education, Educations, GeneralInfo, Languages, PersonalInfo, Reference,
    References, Skills, Summary, WorkExperience, WorkExperiences,
};
pub use violation::{FieldPath, Violation, Violations};

//! Uploaded photo attachments and the tri-state photo carried by a stored resume.

use bytes::Bytes;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validation::violation::{FieldPath, Violations};

/// Largest photo accepted, in bytes (4 MiB).
pub const MAX_PHOTO_BYTES: usize = 4 * 1024 * 1024;

pub const IMAGE_REQUIRED_MESSAGE: &str = "Must be an image file";
pub const PHOTO_TOO_LARGE_MESSAGE: &str = "File must be less than 4MB";

/// A binary file received alongside form fields. Checks only ever read the
/// declared media type and the byte length; the payload stays untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    file_name: Option<String>,
    media_type: String,
    bytes: Bytes,
}

impl FileAttachment {
    pub fn new(media_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: None,
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name;
        self
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Serialized as metadata only; raw bytes never leave the process as JSON.
impl Serialize for FileAttachment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.file_name.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("FileAttachment", len)?;
        if let Some(file_name) = &self.file_name {
            state.serialize_field("fileName", file_name)?;
        }
        state.serialize_field("mediaType", &self.media_type)?;
        state.serialize_field("size", &self.size())?;
        state.end()
    }
}

/// Applies the photo rules to an uploaded file. Both checks always run, so a
/// large non-image file reports two violations.
pub fn check_photo(file: &FileAttachment, path: &FieldPath, violations: &mut Violations) {
    if !file.is_image() {
        violations.push(path, IMAGE_REQUIRED_MESSAGE);
    }
    if file.size() > MAX_PHOTO_BYTES {
        violations.push(path, PHOTO_TOO_LARGE_MESSAGE);
    }
}

/// Photo of a resume record. A freshly validated upload is `Upload`; once the
/// persistence layer has stored it the record carries the `Url` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Photo {
    Upload(FileAttachment),
    Url(String),
    #[default]
    None,
}

impl Photo {
    pub fn is_none(&self) -> bool {
        matches!(self, Photo::None)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Photo::Url(url) => Some(url),
            _ => None,
        }
    }

    pub fn upload(&self) -> Option<&FileAttachment> {
        match self {
            Photo::Upload(file) => Some(file),
            _ => None,
        }
    }
}

impl From<Option<FileAttachment>> for Photo {
    fn from(file: Option<FileAttachment>) -> Self {
        file.map(Photo::Upload).unwrap_or_default()
    }
}

impl Serialize for Photo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Photo::Upload(file) => file.serialize(serializer),
            Photo::Url(url) => serializer.serialize_str(url),
            Photo::None => serializer.serialize_none(),
        }
    }
}

/// Stored records only ever hold a URL or nothing.
impl<'de> Deserialize<'de> for Photo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(url) => Photo::Url(url),
            None => Photo::None,
        })
    }
}

use std::collections::BTreeMap;

use serde_json::Value;

use crate::validation::fields::{expected, Fields};
use crate::validation::photo::FileAttachment;
use crate::validation::violation::{FieldPath, Violations};

/// Untyped input as it arrives from a form or request body: a JSON value plus
/// any uploaded files keyed by field name.
#[derive(Debug, Clone)]
pub struct RawInput {
    value: Value,
    files: BTreeMap<String, FileAttachment>,
}

impl RawInput {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            files: BTreeMap::new(),
        }
    }

    pub fn with_file(mut self, key: impl Into<String>, file: FileAttachment) -> Self {
        self.files.insert(key.into(), file);
        self
    }

    pub fn with_files(mut self, files: BTreeMap<String, FileAttachment>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The root object, or a root-level violation when the input is not one.
    fn root_fields(&self, violations: &mut Violations) -> Option<Fields<'_>> {
        match &self.value {
            Value::Object(map) => Some(Fields::new(map, FieldPath::root()).with_files(&self.files)),
            other => {
                violations.push(&FieldPath::root(), expected("object", other));
                None
            }
        }
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// An object shape with its normalization and rules.
///
/// `parse_fields` always returns a value and records problems in `violations`
/// instead of stopping, which is what lets one schema embed another: the
/// aggregate schemas call the section schemas' `parse_fields` on the same
/// object and every rule keeps reporting under its own path.
pub trait Schema: Sized {
    /// Name under which the schema is registered.
    const NAME: &'static str;

    fn parse_fields(fields: &Fields<'_>, violations: &mut Violations) -> Self;

    fn validate(input: &RawInput) -> Result<Self, Violations> {
        let mut violations = Violations::new();
        let Some(fields) = input.root_fields(&mut violations) else {
            return Err(violations);
        };
        let value = Self::parse_fields(&fields, &mut violations);
        violations.into_result(value)
    }

    fn validate_value(value: Value) -> Result<Self, Violations> {
        Self::validate(&RawInput::new(value))
    }
}

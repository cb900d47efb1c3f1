//! Field-level rules shared by every schema, and the `Fields` reader that
//! section schemas use to pull typed values out of a raw JSON object.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::validation::photo::{check_photo, FileAttachment, IMAGE_REQUIRED_MESSAGE};
use crate::validation::schema::Schema;
use crate::validation::violation::{FieldPath, Violations};

pub const REQUIRED_MESSAGE: &str = "Required";

/// JSON type name as reported in violation messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn expected(kind: &str, value: &Value) -> String {
    format!("Expected {kind}, received {}", json_type(value))
}

/// Whitespace as browsers trim it: the ECMAScript `WhiteSpace` and
/// `LineTerminator` sets. Unlike `char::is_whitespace` this includes U+FEFF
/// and excludes U+0085.
fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trims `text` the same way the editor's form fields do.
pub fn trim_js(text: &str) -> &str {
    text.trim_matches(is_form_whitespace)
}

/// Length in UTF-16 code units, the unit form length limits are stated in.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// A string that may be absent or empty. Whitespace is trimmed; anything that
/// is not a string, `null` included, is a violation.
pub fn optional_string(
    value: Option<&Value>,
    path: &FieldPath,
    violations: &mut Violations,
) -> Option<String> {
    match value? {
        Value::String(text) => Some(trim_js(text).to_string()),
        other => {
            violations.push(path, expected("string", other));
            None
        }
    }
}

/// A string that must be present and, once trimmed, at least `min_len`
/// UTF-16 code units long. An empty string reports `Required` before the length rule.
pub fn required_string(
    value: Option<&Value>,
    min_len: usize,
    path: &FieldPath,
    violations: &mut Violations,
) -> Option<String> {
    let text = match value {
        None => {
            violations.push(path, REQUIRED_MESSAGE);
            return None;
        }
        Some(Value::String(text)) => trim_js(text),
        Some(other) => {
            violations.push(path, expected("string", other));
            return None;
        }
    };

    let len = utf16_len(text);
    if len < 1 {
        violations.push(path, REQUIRED_MESSAGE);
    }
    if min_len > 1 && len < min_len {
        violations.push(path, format!("Must be at least {min_len} characters"));
    }
    Some(text.to_string())
}

/// An array that may be absent.
pub fn optional_array<'a>(
    value: Option<&'a Value>,
    path: &FieldPath,
    violations: &mut Violations,
) -> Option<&'a [Value]> {
    match value? {
        Value::Array(items) => Some(items.as_slice()),
        other => {
            violations.push(path, expected("array", other));
            None
        }
    }
}

/// Optional list of trimmed strings. Order and duplicates are preserved and
/// every bad item is reported.
pub fn string_list(
    value: Option<&Value>,
    path: &FieldPath,
    violations: &mut Violations,
) -> Option<Vec<String>> {
    let items = optional_array(value, path, violations)?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(text) => out.push(trim_js(text).to_string()),
            other => violations.push(&path.index(i), expected("string", other)),
        }
    }
    Some(out)
}

/// Read-only view over one JSON object being checked, positioned at `path`.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    files: Option<&'a BTreeMap<String, FileAttachment>>,
    path: FieldPath,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>, path: FieldPath) -> Self {
        Self {
            map,
            files: None,
            path,
        }
    }

    pub fn with_files(mut self, files: &'a BTreeMap<String, FileAttachment>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn optional_string(&self, key: &str, violations: &mut Violations) -> Option<String> {
        optional_string(self.get(key), &self.path.key(key), violations)
    }

    pub fn required_string(
        &self,
        key: &str,
        min_len: usize,
        violations: &mut Violations,
    ) -> Option<String> {
        required_string(self.get(key), min_len, &self.path.key(key), violations)
    }

    pub fn string_list(&self, key: &str, violations: &mut Violations) -> Option<Vec<String>> {
        string_list(self.get(key), &self.path.key(key), violations)
    }

    /// Optional list of objects, each checked against `T` independently so a
    /// bad entry never hides problems in its siblings.
    pub fn entries<T: Schema>(&self, key: &str, violations: &mut Violations) -> Option<Vec<T>> {
        let path = self.path.key(key);
        let items = optional_array(self.get(key), &path, violations)?;
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let entry_path = path.index(i);
            match item {
                Value::Object(map) => {
                    out.push(T::parse_fields(&Fields::new(map, entry_path), violations))
                }
                other => violations.push(&entry_path, expected("object", other)),
            }
        }
        Some(out)
    }

    /// Optional uploaded file. An uploaded part under `key` wins over the JSON
    /// value; in JSON only `null` or `""` stand in for "no file".
    pub fn photo(&self, key: &str, violations: &mut Violations) -> Option<FileAttachment> {
        let path = self.path.key(key);
        if let Some(file) = self.files.and_then(|files| files.get(key)) {
            check_photo(file, &path, violations);
            return Some(file.clone());
        }

        match self.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) if text.is_empty() => None,
            Some(_) => {
                violations.push(&path, IMAGE_REQUIRED_MESSAGE);
                None
            }
        }
    }
}

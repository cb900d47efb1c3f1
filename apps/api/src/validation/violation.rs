use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Location of a field inside a validated payload, rendered as
/// `workExperiences[2].startDate`. The root path renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.to_string()));
        Self { segments }
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single rule failure, keyed by the path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: FieldPath,
    pub message: String,
}

/// Ordered list of every violation found while checking one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} validation violation(s): {}", .0.len(), summarize(.0))]
pub struct Violations(Vec<Violation>);

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| {
            if v.path.is_root() {
                v.message.clone()
            } else {
                format!("{}: {}", v.path, v.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: &FieldPath, message: impl Into<String>) {
        self.0.push(Violation {
            path: path.clone(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Messages reported for the field rendered as `path`, in report order.
    pub fn messages_at(&self, path: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|v| v.path.to_string() == path)
            .map(|v| v.message.as_str())
            .collect()
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected violations.
    pub fn into_result<T>(self, value: T) -> Result<T, Violations> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_rendering() {
        let path = FieldPath::root()
            .key("workExperiences")
            .index(2)
            .key("startDate");
        assert_eq!(path.to_string(), "workExperiences[2].startDate");
    }

    #[test]
    fn test_root_path_is_empty() {
        assert!(FieldPath::root().is_root());
        assert_eq!(FieldPath::root().to_string(), "");
        assert_eq!(FieldPath::root().index(0).to_string(), "[0]");
    }

    #[test]
    fn test_into_result_empty_is_ok() {
        assert_eq!(Violations::new().into_result(7), Ok(7));
    }

    #[test]
    fn test_into_result_keeps_order() {
        let mut violations = Violations::new();
        violations.push(&FieldPath::root().key("a"), "first");
        violations.push(&FieldPath::root().key("b"), "second");
        let err = violations.into_result(()).unwrap_err();
        let messages: Vec<_> = err.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_serializes_path_as_string() {
        let mut violations = Violations::new();
        violations.push(
            &FieldPath::root().key("skills").index(1),
            "Expected string, received number",
        );
        let json = serde_json::to_value(&violations).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "path": "skills[1]", "message": "Expected string, received number" }])
        );
    }

    #[test]
    fn test_display_summarizes() {
        let mut violations = Violations::new();
        violations.push(&FieldPath::root(), "Expected object, received array");
        violations.push(&FieldPath::root().key("email"), "Expected string, received null");
        assert_eq!(
            violations.to_string(),
            "2 validation violation(s): Expected object, received array; email: Expected string, received null"
        );
    }
}

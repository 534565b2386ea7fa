use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Discriminant for the kind of rule a value failed.
///
/// Serialized forms are the wire-level error codes consumers translate into
/// user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    #[serde(rename = "ERROR_REQUIRED")]
    Required,
    #[serde(rename = "ERROR_MINIMUM_LENGTH")]
    MinimumLength,
    #[serde(rename = "ERROR_MAXIMUM_LENGTH")]
    MaximumLength,
    #[serde(rename = "ERROR_MIN_VALUE")]
    MinValue,
    #[serde(rename = "ERROR_MAX_VALUE")]
    MaxValue,
    #[serde(rename = "ERROR_PATTERN")]
    Pattern,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "ERROR_REQUIRED",
            Self::MinimumLength => "ERROR_MINIMUM_LENGTH",
            Self::MaximumLength => "ERROR_MAXIMUM_LENGTH",
            Self::MinValue => "ERROR_MIN_VALUE",
            Self::MaxValue => "ERROR_MAX_VALUE",
            Self::Pattern => "ERROR_PATTERN",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured validation failure produced by a validator.
///
/// Consumers receive the failing kind, the human-readable field label, the
/// offending value, and a `reasons` map carrying the threshold or pattern that
/// was violated, keyed by the rule name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ValidationErrorKind,
    pub label: String,
    pub value: Option<Value>,
    pub reasons: serde_json::Map<String, Value>,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        label: impl Into<String>,
        value: Option<Value>,
        reasons: serde_json::Map<String, Value>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            value,
            reasons,
        }
    }
}

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::error::{ValidationError, ValidationErrorKind};

/// A reusable check over an optional form value.
///
/// Validators are shared `Arc` closures so the same instance can be handed to
/// a form library repeatedly. Callers that key revalidation on validator
/// identity can compare instances with [`Arc::ptr_eq`].
pub type Validator = Arc<dyn Fn(Option<&Value>) -> Option<ValidationError> + Send + Sync>;

/// Runs validators in order and returns the first failure.
pub fn run_validators(validators: &[Validator], value: Option<&Value>) -> Option<ValidationError> {
    validators.iter().find_map(|validator| validator(value))
}

fn reasons(key: &str, reason: Value) -> serde_json::Map<String, Value> {
    let mut map = serde_json::Map::new();
    map.insert(key.to_string(), reason);
    map
}

/// Fails when the value is absent, JSON null, or an empty string.
pub fn required(label: impl Into<String>) -> Validator {
    let label = label.into();
    Arc::new(move |value| {
        let missing = match value {
            None | Some(Value::Null) => true,
            Some(Value::String(text)) => text.is_empty(),
            Some(_) => false,
        };
        if missing {
            Some(ValidationError::new(
                ValidationErrorKind::Required,
                label.clone(),
                value.cloned(),
                reasons("required", Value::from("required")),
            ))
        } else {
            None
        }
    })
}

/// Fails when a string value is shorter than `minimum` characters.
/// Absent and non-string values pass.
pub fn minimum_length(label: impl Into<String>, minimum: u32) -> Validator {
    let label = label.into();
    Arc::new(move |value| match value {
        Some(Value::String(text)) if (text.chars().count() as u64) < u64::from(minimum) => {
            Some(ValidationError::new(
                ValidationErrorKind::MinimumLength,
                label.clone(),
                value.cloned(),
                reasons("minimumLength", Value::from(minimum)),
            ))
        }
        _ => None,
    })
}

/// Fails when a string value is longer than `maximum` characters.
/// Absent and non-string values pass.
pub fn maximum_length(label: impl Into<String>, maximum: u32) -> Validator {
    let label = label.into();
    Arc::new(move |value| match value {
        Some(Value::String(text)) if (text.chars().count() as u64) > u64::from(maximum) => {
            Some(ValidationError::new(
                ValidationErrorKind::MaximumLength,
                label.clone(),
                value.cloned(),
                reasons("maximumLength", Value::from(maximum)),
            ))
        }
        _ => None,
    })
}

/// Numeric reading of a form value. Strings are trimmed and parsed, anything
/// that does not read as a number is `None` and the bound checks pass on it.
fn as_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Fails when a numeric value is below `minimum`. The bound is inclusive.
pub fn min_value(label: impl Into<String>, minimum: f64) -> Validator {
    let label = label.into();
    Arc::new(move |value| match as_number(value) {
        Some(number) if number < minimum => Some(ValidationError::new(
            ValidationErrorKind::MinValue,
            label.clone(),
            value.cloned(),
            reasons("minValue", Value::from(minimum)),
        )),
        _ => None,
    })
}

/// Fails when a numeric value is above `maximum`. The bound is inclusive.
pub fn max_value(label: impl Into<String>, maximum: f64) -> Validator {
    let label = label.into();
    Arc::new(move |value| match as_number(value) {
        Some(number) if number > maximum => Some(ValidationError::new(
            ValidationErrorKind::MaxValue,
            label.clone(),
            value.cloned(),
            reasons("maxValue", Value::from(maximum)),
        )),
        _ => None,
    })
}

/// Textual reading of a form value for pattern matching. Absent and null
/// values yield `None` and pass; everything else is rendered to text, so an
/// empty string is still matched against the pattern.
fn string_form(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

/// Fails when the textual form of the value does not match `regex`.
pub fn pattern(label: impl Into<String>, regex: Regex) -> Validator {
    let label = label.into();
    Arc::new(move |value| match string_form(value) {
        Some(text) if !regex.is_match(&text) => Some(ValidationError::new(
            ValidationErrorKind::Pattern,
            label.clone(),
            value.cloned(),
            reasons("regex", Value::from(regex.as_str())),
        )),
        _ => None,
    })
}

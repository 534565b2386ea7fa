use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::field_ref::FieldRef;

/// Validation metadata for a single entity property, as served by the
/// constraint endpoint.
///
/// Every piece of metadata is optional. Absent fields deserialize to their
/// defaults so a sparse payload such as `{"required": true}` is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConstraints {
    /// Server-side type tags for this property, for example `["email", "text"]`.
    /// Unrecognized tags are ignored during classification.
    pub types: Vec<String>,

    /// Whether a value must be present.
    pub required: Option<bool>,

    /// Minimum number of characters for textual values.
    pub minimum_length: Option<u32>,

    /// Maximum number of characters for textual values.
    pub maximum_length: Option<u32>,

    /// Inclusive lower bound for numeric values.
    pub min: Option<f64>,

    /// Inclusive upper bound for numeric values.
    pub max: Option<f64>,

    /// Number of digits allowed after the decimal point. Zero or absent means
    /// the value must be an integer.
    pub fraction_length: Option<u32>,

    /// Java type name reported by the server. Informational only.
    pub java_type: Option<String>,

    /// Property name reported by the server. Informational only.
    pub name: Option<String>,

    /// Server-side pattern hint. Informational only; client-side patterns are
    /// derived from `fraction_length`.
    pub pattern: Option<String>,

    /// Radix reported for numeric properties. Informational only.
    pub radix: Option<u32>,
}

/// The full constraint table: entity name to property name to constraints.
///
/// This mirrors the JSON shape of the constraint endpoint, so the table
/// deserializes directly from the response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintTable(HashMap<String, HashMap<String, FieldConstraints>>);

impl ConstraintTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the constraints for a parsed field reference. Returns `None`
    /// when either the entity or the property is unknown.
    pub fn constraints_for(&self, field: &FieldRef) -> Option<&FieldConstraints> {
        self.0.get(field.entity())?.get(field.property())
    }

    /// Inserts or replaces the constraints for one entity property.
    pub fn insert(
        &mut self,
        entity: impl Into<String>,
        property: impl Into<String>,
        constraints: FieldConstraints,
    ) {
        self.0
            .entry(entity.into())
            .or_default()
            .insert(property.into(), constraints);
    }

    /// Number of entities in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Client-side input type derived from the server's type tags.
///
/// Variants are declared from most specific to least specific, and the derived
/// [`Ord`] follows declaration order. Classification picks the minimum, so the
/// most specific recognized tag wins regardless of the order tags arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputType {
    Color,
    DatetimeLocal,
    Datetime,
    Month,
    Week,
    Date,
    Time,
    Email,
    Tel,
    Number,
    Url,
    Password,
    File,
    Image,
    Text,
}

impl InputType {
    /// Parses a server type tag. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "color" => Some(Self::Color),
            "datetime-local" => Some(Self::DatetimeLocal),
            "datetime" => Some(Self::Datetime),
            "month" => Some(Self::Month),
            "week" => Some(Self::Week),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "email" => Some(Self::Email),
            "tel" => Some(Self::Tel),
            "number" => Some(Self::Number),
            "url" => Some(Self::Url),
            "password" => Some(Self::Password),
            "file" => Some(Self::File),
            "image" => Some(Self::Image),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// The HTML input type string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::DatetimeLocal => "datetime-local",
            Self::Datetime => "datetime",
            Self::Month => "month",
            Self::Week => "week",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Url => "url",
            Self::Password => "password",
            Self::File => "file",
            Self::Image => "image",
            Self::Text => "text",
        }
    }

    /// Classifies a list of server type tags into the most specific input
    /// type. Unrecognized tags are skipped; an empty or fully unrecognized
    /// list falls back to [`InputType::Text`].
    pub fn most_specific_for<S: AsRef<str>>(types: &[S]) -> InputType {
        types
            .iter()
            .filter_map(|tag| Self::from_tag(tag.as_ref()))
            .min()
            .unwrap_or(Self::Text)
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

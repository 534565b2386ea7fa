use std::fmt;
use std::str::FromStr;

use crate::error::{FormfoldError, FormfoldResult};

/// A parsed `Entity.property` field identifier.
///
/// The entity is everything before the first dot and the property is the rest.
/// Both parts must be non-empty and the property may not contain further dots,
/// so nested paths like `Hero.address.city` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    entity: String,
    property: String,
}

impl FieldRef {
    /// Parses an identifier of the form `Entity.property`.
    pub fn parse(identifier: &str) -> FormfoldResult<Self> {
        let invalid = || FormfoldError::InvalidIdentifier(identifier.to_string());
        let (entity, property) = identifier.split_once('.').ok_or_else(invalid)?;
        if entity.is_empty() || property.is_empty() || property.contains('.') {
            return Err(invalid());
        }
        Ok(Self {
            entity: entity.to_string(),
            property: property.to_string(),
        })
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity, self.property)
    }
}

impl FromStr for FieldRef {
    type Err = FormfoldError;

    fn from_str(s: &str) -> FormfoldResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entity_and_property() {
        let field = FieldRef::parse("Hero.name").unwrap();
        assert_eq!(field.entity(), "Hero");
        assert_eq!(field.property(), "name");
        assert_eq!(field.to_string(), "Hero.name");
    }

    #[test]
    fn rejects_identifier_without_dot() {
        let err = FieldRef::parse("HeroName").unwrap_err();
        assert!(matches!(err, FormfoldError::InvalidIdentifier(id) if id == "HeroName"));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(FieldRef::parse(".name").is_err());
        assert!(FieldRef::parse("Hero.").is_err());
        assert!(FieldRef::parse(".").is_err());
        assert!(FieldRef::parse("").is_err());
    }

    #[test]
    fn rejects_nested_property_paths() {
        let err = FieldRef::parse("Hero.address.city").unwrap_err();
        assert!(matches!(err, FormfoldError::InvalidIdentifier(_)));
    }

    #[test]
    fn from_str_matches_parse() {
        let field: FieldRef = "Hero.email".parse().unwrap();
        assert_eq!(field, FieldRef::parse("Hero.email").unwrap());
    }
}

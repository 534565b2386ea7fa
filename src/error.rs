use thiserror::Error;

/// Unified error type for the formfold crate.
///
/// Validation failures are not errors: a validator rejecting a value returns a
/// [`ValidationError`](crate::validation::ValidationError) value instead. This
/// enum covers the operational failures, from unusable configuration and
/// malformed field identifiers to a constraint load going wrong.
#[derive(Debug, Error)]
pub enum FormfoldError {
    /// The configuration could not be built, for example a missing URL or
    /// authentication enabled without a credential.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A field identifier did not have the `Entity.property` shape.
    #[error("Invalid field identifier '{0}': expected the format 'Entity.property'")]
    InvalidIdentifier(String),

    /// Transport-level failure while fetching the constraint table.
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The constraint endpoint answered with a non-success status. The raw
    /// response body is carried so the caller can decide what to do with it.
    #[error("Constraint endpoint returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The constraint endpoint answered 2xx but the body was not a valid
    /// constraint table.
    #[error("Malformed constraint payload: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Result type alias for operations that can fail with a [`FormfoldError`].
pub type FormfoldResult<T> = Result<T, FormfoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_display() {
        let err = FormfoldError::Configuration("constraints_url is required".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: constraints_url is required"
        );
    }

    #[test]
    fn invalid_identifier_display_names_expected_shape() {
        let err = FormfoldError::InvalidIdentifier("HeroName".to_string());
        assert!(err.to_string().contains("HeroName"));
        assert!(err.to_string().contains("Entity.property"));
    }

    #[test]
    fn unexpected_status_carries_status_and_body() {
        let err = FormfoldError::UnexpectedStatus {
            status: 500,
            body: "oops".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("oops"));
    }

    #[test]
    fn deserialize_error_wraps_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FormfoldError::from(parse_err);
        assert!(matches!(err, FormfoldError::Deserialize(_)));
    }
}

use std::fmt;
use std::sync::Arc;

use crate::constraints::{ConstraintsStore, SharedConstraintsStore};
use crate::error::{FormfoldError, FormfoldResult};

/// Configuration shared by the constraint loader and the fields of one form
/// application.
///
/// There is no process-wide singleton. Construct one configuration with
/// [`ConstraintsConfig::builder`] and pass it to whatever needs it; tests can
/// build as many isolated configurations as they like.
#[derive(Clone)]
pub struct ConstraintsConfig {
    constraints_url: String,
    needs_authentication: bool,
    auth_token: Option<String>,
    store: Arc<dyn ConstraintsStore>,
}

impl ConstraintsConfig {
    pub fn builder() -> ConstraintsConfigBuilder {
        ConstraintsConfigBuilder::default()
    }

    /// URL of the endpoint serving the constraint table.
    pub fn constraints_url(&self) -> &str {
        &self.constraints_url
    }

    /// Whether constraint requests carry the bearer token.
    pub fn needs_authentication(&self) -> bool {
        self.needs_authentication
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// The store holding the currently published constraint table.
    pub fn store(&self) -> &Arc<dyn ConstraintsStore> {
        &self.store
    }
}

impl fmt::Debug for ConstraintsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintsConfig")
            .field("constraints_url", &self.constraints_url)
            .field("needs_authentication", &self.needs_authentication)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Builder for [`ConstraintsConfig`].
#[derive(Default)]
pub struct ConstraintsConfigBuilder {
    constraints_url: Option<String>,
    needs_authentication: bool,
    auth_token: Option<String>,
    store: Option<Arc<dyn ConstraintsStore>>,
}

impl ConstraintsConfigBuilder {
    pub fn constraints_url(mut self, url: impl Into<String>) -> Self {
        self.constraints_url = Some(url.into());
        self
    }

    pub fn needs_authentication(mut self, needs_authentication: bool) -> Self {
        self.needs_authentication = needs_authentication;
        self
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Overrides the default in-memory store, for sharing a table between
    /// configurations or injecting a fake in tests.
    pub fn store(mut self, store: Arc<dyn ConstraintsStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> FormfoldResult<ConstraintsConfig> {
        let constraints_url = match self.constraints_url {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(FormfoldError::Configuration(
                    "constraints_url is required".to_string(),
                ))
            }
        };
        if self.needs_authentication && self.auth_token.is_none() {
            return Err(FormfoldError::Configuration(
                "auth_token is required when needs_authentication is enabled".to_string(),
            ));
        }
        Ok(ConstraintsConfig {
            constraints_url,
            needs_authentication: self.needs_authentication,
            auth_token: self.auth_token,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(SharedConstraintsStore::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_url_only() {
        let config = ConstraintsConfig::builder()
            .constraints_url("http://localhost:8080/api/constraints")
            .build()
            .unwrap();
        assert_eq!(
            config.constraints_url(),
            "http://localhost:8080/api/constraints"
        );
        assert!(!config.needs_authentication());
        assert_eq!(config.auth_token(), None);
        assert!(config.store().current().is_none());
    }

    #[test]
    fn missing_url_is_a_configuration_error() {
        let err = ConstraintsConfig::builder().build().unwrap_err();
        assert!(matches!(err, FormfoldError::Configuration(_)));
        assert!(err.to_string().contains("constraints_url"));
    }

    #[test]
    fn empty_url_is_a_configuration_error() {
        let err = ConstraintsConfig::builder()
            .constraints_url("")
            .build()
            .unwrap_err();
        assert!(matches!(err, FormfoldError::Configuration(_)));
    }

    #[test]
    fn authentication_without_token_is_a_configuration_error() {
        let err = ConstraintsConfig::builder()
            .constraints_url("http://localhost/constraints")
            .needs_authentication(true)
            .build()
            .unwrap_err();
        assert!(matches!(err, FormfoldError::Configuration(_)));
        assert!(err.to_string().contains("auth_token"));
    }

    #[test]
    fn authentication_with_token_builds() {
        let config = ConstraintsConfig::builder()
            .constraints_url("http://localhost/constraints")
            .needs_authentication(true)
            .auth_token("secret")
            .build()
            .unwrap();
        assert!(config.needs_authentication());
        assert_eq!(config.auth_token(), Some("secret"));
    }

    #[test]
    fn injected_store_is_shared() {
        let store = Arc::new(SharedConstraintsStore::new());
        let config = ConstraintsConfig::builder()
            .constraints_url("http://localhost/constraints")
            .store(store.clone())
            .build()
            .unwrap();
        let ticket = store.begin_publish();
        assert!(store.publish(ticket, crate::constraints::ConstraintTable::new()));
        assert!(config.store().current().is_some());
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let config = ConstraintsConfig::builder()
            .constraints_url("http://localhost/constraints")
            .needs_authentication(true)
            .auth_token("secret")
            .build()
            .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("redacted"));
    }
}

use log::info;
use reqwest::Client;

use crate::config::ConstraintsConfig;
use crate::error::{FormfoldError, FormfoldResult};

use super::types::ConstraintTable;

/// Fetches the constraint table over HTTP and publishes it to the store in
/// the configuration.
///
/// The loader owns a reqwest client without a request timeout. Slow
/// constraint endpoints are tolerated; callers that want a deadline wrap
/// [`load`](ConstraintsLoader::load) themselves.
pub struct ConstraintsLoader {
    client: Client,
    config: ConstraintsConfig,
}

impl ConstraintsLoader {
    pub fn new(config: ConstraintsConfig) -> FormfoldResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("formfold/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// Performs one fetch of the constraint table.
    ///
    /// A publish ticket is taken before the request goes out, so when several
    /// loads run concurrently the response of an older request can never
    /// overwrite the table published by a newer one. A dropped stale response
    /// still returns `Ok`.
    pub async fn load(&self) -> FormfoldResult<()> {
        let ticket = self.config.store().begin_publish();

        let mut request = self.client.get(self.config.constraints_url());
        if self.config.needs_authentication() {
            if let Some(token) = self.config.auth_token() {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FormfoldError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let table: ConstraintTable = serde_json::from_str(&body)?;
        let entities = table.len();
        if self.config.store().publish(ticket, table) {
            info!("Published constraint table covering {} entities", entities);
        } else {
            info!(
                "Dropped stale constraint response for ticket {}",
                ticket.value()
            );
        }
        Ok(())
    }
}

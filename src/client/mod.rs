use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::domain::schedule::{MusterConfiguration, MusterSaver};

pub const GENERIC_ERROR_MESSAGE: &str = "Internal Server Error";

/// Whose schedule a save replaces.
#[derive(Clone, Debug, PartialEq)]
pub enum MusterOwner {
    Org { org_id: u32 },
    Unit { org_id: u32, unit_id: u32 },
}

/// Saves an editing session by replacing the owner's schedule over HTTP.
pub struct HttpMusterSaver {
    base_url: String,
    owner: MusterOwner,
    client: reqwest::Client,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize, Debug)]
struct ErrorEntry {
    message: String,
}

impl HttpMusterSaver {
    pub fn new(base_url: impl Into<String>, owner: MusterOwner) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            owner,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self) -> String {
        match self.owner {
            MusterOwner::Org { org_id } => {
                format!("{}/api/org/{}/default-muster", self.base_url, org_id)
            }
            MusterOwner::Unit { org_id, unit_id } => {
                format!("{}/api/unit/{}/{}/muster", self.base_url, org_id, unit_id)
            }
        }
    }

    fn body(&self, musters: Vec<MusterConfiguration>) -> serde_json::Value {
        match self.owner {
            MusterOwner::Org { .. } => json!({ "defaultMusterConfiguration": musters }),
            MusterOwner::Unit { .. } => json!({ "musterConfiguration": musters }),
        }
    }
}

#[async_trait]
impl MusterSaver for HttpMusterSaver {
    async fn save(&self, musters: Vec<MusterConfiguration>) -> Result<(), String> {
        let url = self.url();

        log::trace!("sending muster configuration to {}: {:?}", url, musters);

        let response = self
            .client
            .put(&url)
            .json(&self.body(musters))
            .send()
            .await
            .map_err(|err| {
                log::warn!("failed to send muster configuration to {}: {}", url, err);
                GENERIC_ERROR_MESSAGE.to_string()
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        log::trace!("received error response from {}: {}: {}", url, status, body);

        Err(error_message(&body))
    }
}

/// The first structured error message of a response body, if any.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.errors.into_iter().next())
        .map(|error| error.message)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

use crate::modules::time_sync::core::ports::WorklogSink;
use crate::modules::time_sync::core::tempo_worklog::TempoWorklog;
use crate::shared::infrastructure::http_gateway::{GatewayError, read_value};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct TempoApi {
    client: Client,
    base_url: String,
}

impl TempoApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn worklogs_url(&self) -> String {
        format!("{}/core/3/worklogs", self.base_url)
    }
}

#[async_trait]
impl WorklogSink for TempoApi {
    async fn post_worklog(
        &self,
        worklog: &TempoWorklog,
        token: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        let url = self.worklogs_url();

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(worklog)
            .send()
            .await
            .map_err(|err| GatewayError::unreachable(&url, err))?;

        read_value(&url, response).await
    }
}

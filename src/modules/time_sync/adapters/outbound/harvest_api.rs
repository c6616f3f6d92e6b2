use crate::modules::time_sync::core::harvest_time_entry::{HarvestTimeEntriesPage, HarvestTimeEntry};
use crate::modules::time_sync::core::ports::{HarvestCredentials, TimeEntrySource};
use crate::shared::infrastructure::http_gateway::{GatewayError, read_json};
use async_trait::async_trait;
use reqwest::Client;

pub const ACCOUNT_ID_HEADER: &str = "Harvest-Account-Id";

#[derive(Debug, Clone)]
pub struct HarvestApi {
    client: Client,
    base_url: String,
}

impl HarvestApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn time_entries_url(&self) -> String {
        format!("{}/v2/time_entries", self.base_url)
    }
}

#[async_trait]
impl TimeEntrySource for HarvestApi {
    async fn fetch_time_entries(
        &self,
        from: &str,
        credentials: &HarvestCredentials,
    ) -> Result<Vec<HarvestTimeEntry>, GatewayError> {
        let url = self.time_entries_url();
        tracing::debug!(%url, from, "fetching harvest time entries");

        let response = self
            .client
            .get(&url)
            .query(&[("from", from)])
            .bearer_auth(&credentials.token)
            .header(ACCOUNT_ID_HEADER, &credentials.account_id)
            .send()
            .await
            .map_err(|err| GatewayError::unreachable(&url, err))?;

        let page: HarvestTimeEntriesPage = read_json(&url, response).await?;
        Ok(page.time_entries)
    }
}

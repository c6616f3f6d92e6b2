// Ports the copy use case needs from the outside world.
//
// The reqwest clients in adapters/outbound implement these against the real
// APIs; the in-memory adapters implement them for tests and local runs.

use crate::modules::time_sync::core::harvest_time_entry::HarvestTimeEntry;
use crate::modules::time_sync::core::tempo_worklog::TempoWorklog;
use crate::shared::infrastructure::http_gateway::GatewayError;
use async_trait::async_trait;

/// Credentials for one Harvest account. Passed through untouched.
#[derive(Clone)]
pub struct HarvestCredentials {
    pub token: String,
    pub account_id: String,
}

impl std::fmt::Debug for HarvestCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarvestCredentials")
            .field("token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

#[async_trait]
pub trait TimeEntrySource: Send + Sync {
    /// Time entries with `spent_date >= from`, first page only.
    async fn fetch_time_entries(
        &self,
        from: &str,
        credentials: &HarvestCredentials,
    ) -> Result<Vec<HarvestTimeEntry>, GatewayError>;
}

#[async_trait]
pub trait WorklogSink: Send + Sync {
    /// Creates one worklog and returns the response body as sent by the API.
    async fn post_worklog(
        &self,
        worklog: &TempoWorklog,
        token: &str,
    ) -> Result<serde_json::Value, GatewayError>;
}

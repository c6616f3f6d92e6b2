use crate::modules::time_sync::core::harvest_time_entry::HarvestTimeEntry;
use crate::modules::time_sync::core::ports::{HarvestCredentials, TimeEntrySource, WorklogSink};
use crate::modules::time_sync::core::tempo_worklog::TempoWorklog;
use crate::shared::infrastructure::http_gateway::GatewayError;
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct InMemoryTimeEntrySource {
    entries: Vec<HarvestTimeEntry>,
    offline: bool,
    pub requests: Mutex<Vec<String>>,
}

impl InMemoryTimeEntrySource {
    pub fn new(entries: Vec<HarvestTimeEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait]
impl TimeEntrySource for InMemoryTimeEntrySource {
    async fn fetch_time_entries(
        &self,
        from: &str,
        _credentials: &HarvestCredentials,
    ) -> Result<Vec<HarvestTimeEntry>, GatewayError> {
        self.requests.lock().await.push(from.to_string());
        if self.offline {
            return Err(GatewayError::Status {
                url: "memory://harvest/v2/time_entries".into(),
                status: 503,
                body: "Harvest offline".into(),
            });
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.spent_date.as_str() >= from)
            .cloned()
            .collect())
    }
}

/// Accepts every worklog except those whose position in the posting order was marked as failing.
/// Failing posts answer at once; accepted ones wait `delay_ms` first.
#[derive(Debug, Default)]
pub struct InMemoryWorklogSink {
    failing_posts: HashSet<usize>,
    delay_ms: u64,
    posted: Mutex<Vec<TempoWorklog>>,
    completed: AtomicUsize,
}

impl InMemoryWorklogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_post(mut self, index: usize) -> Self {
        self.failing_posts.insert(index);
        self
    }

    pub fn set_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub async fn posted(&self) -> Vec<TempoWorklog> {
        self.posted.lock().await.clone()
    }

    /// Posts that were accepted and ran to the end.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorklogSink for InMemoryWorklogSink {
    async fn post_worklog(
        &self,
        worklog: &TempoWorklog,
        _token: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        let index = {
            let mut posted = self.posted.lock().await;
            posted.push(worklog.clone());
            posted.len() - 1
        };

        if self.failing_posts.contains(&index) {
            return Err(GatewayError::Status {
                url: "memory://tempo/core/3/worklogs".into(),
                status: 400,
                body: format!("worklog #{index} rejected"),
            });
        }

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        Ok(json!({
            "tempoWorklogId": index + 1,
            "startDate": worklog.start_date,
            "timeSpentSeconds": worklog.time_spent_seconds,
        }))
    }
}

use crate::modules::time_sync::core::map_to_worklog::to_tempo_worklog;
use crate::modules::time_sync::core::ports::{TimeEntrySource, WorklogSink};
use crate::modules::time_sync::core::tempo_worklog::TempoWorklog;
use crate::modules::time_sync::use_cases::copy_time_entries::command::CopyTimeEntries;
use crate::modules::time_sync::use_cases::copy_time_entries::report::CopyReport;
use crate::shared::config::WorklogTemplate;
use crate::shared::infrastructure::http_gateway::GatewayError;
use futures::future::join_all;
use futures::{StreamExt, stream};
use std::num::NonZeroUsize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("fetching harvest time entries failed: {0}")]
    Fetch(#[source] GatewayError),

    #[error("posting tempo worklog failed: {0}")]
    Dispatch(#[source] GatewayError),
}

pub struct CopyTimeEntriesHandler<TSource, TSink>
where
    TSource: TimeEntrySource + ?Sized,
    TSink: WorklogSink + ?Sized,
{
    source: Arc<TSource>,
    sink: Arc<TSink>,
    template: WorklogTemplate,
    max_concurrent_posts: Option<NonZeroUsize>,
}

impl<TSource, TSink> CopyTimeEntriesHandler<TSource, TSink>
where
    TSource: TimeEntrySource + ?Sized,
    TSink: WorklogSink + ?Sized,
{
    pub fn new(source: Arc<TSource>, sink: Arc<TSink>, template: WorklogTemplate) -> Self {
        Self {
            source,
            sink,
            template,
            max_concurrent_posts: None,
        }
    }

    pub fn with_max_concurrent_posts(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.max_concurrent_posts = limit;
        self
    }

    /// Fetch, map, post everything, then report. Every post runs to completion; if any of them
    /// failed the whole call fails with the first error and the accepted ones stay in Tempo.
    pub async fn handle(&self, command: CopyTimeEntries) -> Result<CopyReport, ApplicationError> {
        let entries = self
            .source
            .fetch_time_entries(&command.from, &command.harvest)
            .await
            .map_err(ApplicationError::Fetch)?;
        tracing::info!(fetched = entries.len(), from = %command.from, "fetched harvest time entries");

        let worklogs: Vec<TempoWorklog> = entries
            .iter()
            .map(|entry| to_tempo_worklog(entry, &command.tempo_account_id, &self.template))
            .collect();

        let records = self
            .dispatch(&worklogs, &command.tempo_token)
            .await
            .map_err(ApplicationError::Dispatch)?;

        let report = CopyReport::new(records);
        tracing::info!(copied = report.records.len(), "copied worklogs to tempo");
        Ok(report)
    }

    async fn dispatch(
        &self,
        worklogs: &[TempoWorklog],
        token: &str,
    ) -> Result<Vec<serde_json::Value>, GatewayError> {
        let posts: Vec<_> = worklogs
            .iter()
            .map(|worklog| self.sink.post_worklog(worklog, token))
            .collect();

        let results: Vec<Result<serde_json::Value, GatewayError>> = match self.max_concurrent_posts {
            None => join_all(posts).await,
            Some(limit) => stream::iter(posts).buffered(limit.get()).collect().await,
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            tracing::warn!(
                failed,
                succeeded = results.len() - failed,
                "some tempo posts were rejected"
            );
        }
        results.into_iter().collect()
    }
}

// Composition root for the time_sync bounded context.
//
// - Read config from environment.
// - Build the reqwest clients and wire them into the copy handler.
// - Expose the handler over HTTP.

pub mod http;
pub mod state;

use crate::modules::time_sync::adapters::outbound::harvest_api::HarvestApi;
use crate::modules::time_sync::adapters::outbound::tempo_api::TempoApi;
use crate::modules::time_sync::core::ports::{TimeEntrySource, WorklogSink};
use crate::modules::time_sync::use_cases::copy_time_entries::handler::CopyTimeEntriesHandler;
use crate::shared::config::Config;
use crate::shell::state::AppState;
use std::sync::Arc;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_state(config: &Config) -> Result<AppState, reqwest::Error> {
    // Harvest rejects requests without a User-Agent.
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let source: Arc<dyn TimeEntrySource> =
        Arc::new(HarvestApi::new(client.clone(), config.harvest_base_url.clone()));
    let sink: Arc<dyn WorklogSink> = Arc::new(TempoApi::new(client, config.tempo_base_url.clone()));

    let copy_handler = CopyTimeEntriesHandler::new(source, sink, config.worklog_template.clone())
        .with_max_concurrent_posts(config.max_concurrent_posts);

    Ok(AppState {
        copy_handler: Arc::new(copy_handler),
    })
}

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::time_sync::use_cases::copy_time_entries::inbound::http as copy_http;
use crate::shell::state::AppState;

pub const COPY_TIME_ENTRIES_PATH: &str = "/harvest-to-tempo";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(COPY_TIME_ENTRIES_PATH, get(copy_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::modules::time_sync::core::ports::HarvestCredentials;
use crate::modules::time_sync::use_cases::copy_time_entries::command::CopyTimeEntries;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyTimeEntriesParams {
    pub from: String,
    pub harvest_auth: String,
    pub harvest_account_id: String,
    pub tempo_auth: String,
    pub tempo_account_id: String,
}

impl From<CopyTimeEntriesParams> for CopyTimeEntries {
    fn from(params: CopyTimeEntriesParams) -> Self {
        Self {
            from: params.from,
            harvest: HarvestCredentials {
                token: params.harvest_auth,
                account_id: params.harvest_account_id,
            },
            tempo_token: params.tempo_auth,
            tempo_account_id: params.tempo_account_id,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<CopyTimeEntriesParams>,
) -> impl IntoResponse {
    let span = tracing::info_span!("copy_time_entries", invocation_id = %Uuid::now_v7());

    async move {
        match state.copy_handler.handle(params.into()).await {
            Ok(report) => (StatusCode::OK, Json(report)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "copy from harvest to tempo failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

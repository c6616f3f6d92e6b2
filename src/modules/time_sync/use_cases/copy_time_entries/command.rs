use crate::modules::time_sync::core::ports::HarvestCredentials;

/// One invocation's worth of input. No field is validated beyond being present.
#[derive(Clone)]
pub struct CopyTimeEntries {
    pub from: String,
    pub harvest: HarvestCredentials,
    pub tempo_token: String,
    pub tempo_account_id: String,
}

impl std::fmt::Debug for CopyTimeEntries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyTimeEntries")
            .field("from", &self.from)
            .field("harvest", &self.harvest)
            .field("tempo_token", &"<redacted>")
            .field("tempo_account_id", &self.tempo_account_id)
            .finish()
    }
}

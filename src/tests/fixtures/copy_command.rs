use crate::modules::time_sync::core::ports::HarvestCredentials;
use crate::modules::time_sync::use_cases::copy_time_entries::command::CopyTimeEntries;

pub struct CopyTimeEntriesBuilder {
    inner: CopyTimeEntries,
}

impl Default for CopyTimeEntriesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CopyTimeEntriesBuilder {
    pub fn new() -> Self {
        Self {
            inner: CopyTimeEntries {
                from: "2024-03-01".to_string(),
                harvest: HarvestCredentials {
                    token: "harvest-token-0001".to_string(),
                    account_id: "1234567".to_string(),
                },
                tempo_token: "tempo-token-0001".to_string(),
                tempo_account_id: "557058:user-fixed-0001".to_string(),
            },
        }
    }

    pub fn from_date(mut self, v: impl Into<String>) -> Self {
        self.inner.from = v.into();
        self
    }

    pub fn harvest_token(mut self, v: impl Into<String>) -> Self {
        self.inner.harvest.token = v.into();
        self
    }

    pub fn harvest_account_id(mut self, v: impl Into<String>) -> Self {
        self.inner.harvest.account_id = v.into();
        self
    }

    pub fn tempo_token(mut self, v: impl Into<String>) -> Self {
        self.inner.tempo_token = v.into();
        self
    }

    pub fn tempo_account_id(mut self, v: impl Into<String>) -> Self {
        self.inner.tempo_account_id = v.into();
        self
    }

    pub fn build(self) -> CopyTimeEntries {
        self.inner
    }
}

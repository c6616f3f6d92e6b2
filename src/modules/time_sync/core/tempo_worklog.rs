use serde::{Deserialize, Serialize};

/// Body of `POST /core/3/worklogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempoWorklog {
    pub start_date: String,
    pub start_time: String,
    pub description: Option<String>,
    pub author_account_id: String,
    pub time_spent_seconds: i64,
    pub billable_seconds: i64,
    pub issue_key: String,
    pub remaining_estimate_seconds: i64,
    pub attributes: Vec<WorklogAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorklogAttribute {
    pub key: String,
    pub value: String,
}

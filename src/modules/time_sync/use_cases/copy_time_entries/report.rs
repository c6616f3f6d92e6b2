use serde::Serialize;

/// Success envelope: a human readable summary plus every Tempo response, in posting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyReport {
    pub message: String,
    pub records: Vec<serde_json::Value>,
}

impl CopyReport {
    pub fn new(records: Vec<serde_json::Value>) -> Self {
        Self {
            message: format!(
                "{} record(s) successfully copied from Harvest to Tempo!",
                records.len()
            ),
            records,
        }
    }
}

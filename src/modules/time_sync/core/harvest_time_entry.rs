use serde::{Deserialize, Serialize};

/// One Harvest time entry, reduced to the fields that survive the copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestTimeEntry {
    pub spent_date: String,
    pub hours: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `GET /v2/time_entries`. Pagination fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HarvestTimeEntriesPage {
    pub time_entries: Vec<HarvestTimeEntry>,
}

// Shared Harvest fixtures: a three entry page (hours 1, 2.5 and 0) and a builder for single entries.

use crate::modules::time_sync::core::harvest_time_entry::{HarvestTimeEntriesPage, HarvestTimeEntry};

pub const HARVEST_TIME_ENTRIES_JSON: &str = include_str!("json/harvest_time_entries.json");

pub fn make_harvest_time_entries() -> Vec<HarvestTimeEntry> {
    let page: HarvestTimeEntriesPage = serde_json::from_str(HARVEST_TIME_ENTRIES_JSON).unwrap();
    page.time_entries
}

pub struct HarvestTimeEntryBuilder {
    inner: HarvestTimeEntry,
}

impl Default for HarvestTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl HarvestTimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: HarvestTimeEntry {
                spent_date: "2024-03-04".to_string(),
                hours: 1.0,
                notes: Some("This is a test".to_string()),
            },
        }
    }

    pub fn spent_date(mut self, v: impl Into<String>) -> Self {
        self.inner.spent_date = v.into();
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn notes(mut self, v: Option<String>) -> Self {
        self.inner.notes = v;
        self
    }

    pub fn build(self) -> HarvestTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod harvest_time_entries_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_sample_page() {
        let entries = make_harvest_time_entries();

        let hours: Vec<_> = entries.iter().map(|e| e.hours).collect();
        assert_eq!(hours, vec![1.0, 2.5, 0.0]);
        assert_eq!(entries[2].notes, None);
    }
}

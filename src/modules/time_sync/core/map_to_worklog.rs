use crate::modules::time_sync::core::harvest_time_entry::HarvestTimeEntry;
use crate::modules::time_sync::core::tempo_worklog::{TempoWorklog, WorklogAttribute};
use crate::shared::config::{WORK_TYPE_ATTRIBUTE_KEY, WorklogTemplate};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Harvest reports fractional hours; Tempo wants whole seconds.
pub fn hours_to_seconds(hours: f64) -> i64 {
    (hours * SECONDS_PER_HOUR).round() as i64
}

pub fn to_tempo_worklog(
    entry: &HarvestTimeEntry,
    author_account_id: &str,
    template: &WorklogTemplate,
) -> TempoWorklog {
    let seconds = hours_to_seconds(entry.hours);
    TempoWorklog {
        start_date: entry.spent_date.clone(),
        start_time: template.start_time.clone(),
        description: entry.notes.clone(),
        author_account_id: author_account_id.to_string(),
        time_spent_seconds: seconds,
        billable_seconds: seconds,
        issue_key: template.issue_key.clone(),
        remaining_estimate_seconds: template.remaining_estimate_seconds,
        attributes: vec![WorklogAttribute {
            key: WORK_TYPE_ATTRIBUTE_KEY.to_string(),
            value: template.work_type.clone(),
        }],
    }
}

#[cfg(test)]
mod map_to_worklog_tests {
    use super::*;
    use crate::tests::fixtures::harvest_time_entries::HarvestTimeEntryBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn template() -> WorklogTemplate {
        WorklogTemplate::default()
    }

    #[rstest]
    #[case(1.0, 3600)]
    #[case(2.5, 9000)]
    #[case(0.0, 0)]
    #[case(0.25, 900)]
    #[case(7.75, 27900)]
    #[case(0.33, 1188)]
    fn it_should_convert_hours_to_spent_and_billable_seconds(
        template: WorklogTemplate,
        #[case] hours: f64,
        #[case] expected: i64,
    ) {
        let entry = HarvestTimeEntryBuilder::new().hours(hours).build();

        let worklog = to_tempo_worklog(&entry, "author-1", &template);

        assert_eq!(worklog.time_spent_seconds, expected);
        assert_eq!(worklog.billable_seconds, expected);
    }

    #[rstest]
    #[case("2024-01-01", Some("standup"))]
    #[case("2023-12-31", None)]
    fn it_should_always_start_at_the_template_time(
        template: WorklogTemplate,
        #[case] spent_date: &str,
        #[case] notes: Option<&str>,
    ) {
        let entry = HarvestTimeEntryBuilder::new()
            .spent_date(spent_date)
            .notes(notes.map(str::to_string))
            .build();

        let worklog = to_tempo_worklog(&entry, "author-1", &template);

        assert_eq!(worklog.start_time, "09:00:00");
        assert_eq!(worklog.start_date, spent_date);
        assert_eq!(worklog.description.as_deref(), notes);
    }

    #[rstest]
    fn it_should_fill_the_fixed_fields_from_the_template(template: WorklogTemplate) {
        let entry = HarvestTimeEntryBuilder::new().build();

        let worklog = to_tempo_worklog(&entry, "557058:tempo-author", &template);

        assert_eq!(worklog.author_account_id, "557058:tempo-author");
        assert_eq!(worklog.issue_key, "FREEM-5");
        assert_eq!(worklog.remaining_estimate_seconds, 0);
        assert_eq!(
            worklog.attributes,
            vec![WorklogAttribute {
                key: "_WorkType_".into(),
                value: "Development".into(),
            }]
        );
    }

    #[rstest]
    fn it_should_use_an_overridden_template() {
        let template = WorklogTemplate {
            issue_key: "OPS-12".into(),
            start_time: "08:30:00".into(),
            work_type: "Support".into(),
            remaining_estimate_seconds: 0,
        };
        let entry = HarvestTimeEntryBuilder::new().build();

        let worklog = to_tempo_worklog(&entry, "author-1", &template);

        assert_eq!(worklog.issue_key, "OPS-12");
        assert_eq!(worklog.start_time, "08:30:00");
        assert_eq!(worklog.attributes[0].value, "Support");
    }
}

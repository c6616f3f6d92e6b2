use crate::modules::time_sync::core::ports::{TimeEntrySource, WorklogSink};
use crate::modules::time_sync::use_cases::copy_time_entries::handler::CopyTimeEntriesHandler;
use std::sync::Arc;

pub type DynCopyTimeEntriesHandler = CopyTimeEntriesHandler<dyn TimeEntrySource, dyn WorklogSink>;

#[derive(Clone)]
pub struct AppState {
    pub copy_handler: Arc<DynCopyTimeEntriesHandler>,
}

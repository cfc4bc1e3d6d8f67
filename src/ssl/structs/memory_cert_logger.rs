use crate::ssl::structs::log_entry::LogEntry;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemoryCertLogger {
    pub(crate) entries: Mutex<Vec<LogEntry>>,
}

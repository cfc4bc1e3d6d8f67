use crate::ssl::enums::cert_log_level::CertLogLevel;
use crate::ssl::structs::log_entry::LogEntry;
use crate::ssl::structs::memory_cert_logger::MemoryCertLogger;
use crate::ssl::traits::cert_logger::CertLogger;

impl MemoryCertLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn last_entry(&self) -> Option<LogEntry> {
        self.entries.lock().last().cloned()
    }

    /// Number of entries at `level` whose message contains `needle`.
    pub fn count_matching(&self, level: CertLogLevel, needle: &str) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level == level && entry.message.contains(needle))
            .count()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, level: CertLogLevel, message: &str) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
            logged_at: chrono::Utc::now(),
        });
    }
}

impl CertLogger for MemoryCertLogger {
    fn info(&self, message: &str) {
        self.push(CertLogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(CertLogLevel::Error, message);
    }
}

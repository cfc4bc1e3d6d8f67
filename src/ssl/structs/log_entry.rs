use crate::ssl::enums::cert_log_level::CertLogLevel;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LogEntry {
    pub level: CertLogLevel,
    pub message: String,
    pub logged_at: chrono::DateTime<chrono::Utc>,
}

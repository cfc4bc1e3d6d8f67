use crate::ssl::enums::cert_log_level::CertLogLevel;

impl std::fmt::Display for CertLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CertLogLevel::Info => write!(f, "INFO"),
            CertLogLevel::Error => write!(f, "ERROR"),
        }
    }
}

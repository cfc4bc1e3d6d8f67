use crate::ssl::structs::log_cert_logger::LogCertLogger;
use crate::ssl::traits::cert_logger::CertLogger;
use log::{error, info};

impl CertLogger for LogCertLogger {
    fn info(&self, message: &str) {
        info!("[CERTIFICATE] {}", message);
    }

    fn error(&self, message: &str) {
        error!("[CERTIFICATE] {}", message);
    }
}

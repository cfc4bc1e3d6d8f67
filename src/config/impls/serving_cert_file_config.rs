use std::time::Duration;
use crate::config::structs::serving_cert_file_config::ServingCertFileConfig;
use crate::ssl::enums::certificate_error::CertificateError;

pub const DEFAULT_FILE_SYNC_INTERVAL: Duration = Duration::from_secs(60);

impl ServingCertFileConfig {
    pub fn new(cert_file_path: &str, key_file_path: &str, file_sync_interval: Duration) -> ServingCertFileConfig {
        ServingCertFileConfig {
            cert_file_path: cert_file_path.to_string(),
            key_file_path: key_file_path.to_string(),
            file_sync_interval
        }
    }

    pub fn sync_interval(&self) -> Duration {
        if self.file_sync_interval.is_zero() {
            return DEFAULT_FILE_SYNC_INTERVAL;
        }
        self.file_sync_interval
    }

    pub fn validate(&self) -> Result<(), CertificateError> {
        if self.cert_file_path.trim().is_empty() {
            return Err(CertificateError::InvalidConfiguration(String::from("cert_file_path is empty")));
        }
        if self.key_file_path.trim().is_empty() {
            return Err(CertificateError::InvalidConfiguration(String::from("key_file_path is empty")));
        }
        Ok(())
    }
}

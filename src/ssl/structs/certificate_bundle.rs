use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::SystemTime;

pub struct CertificateBundle {
    pub certified_key: Arc<CertifiedKey>,
    pub cert_mod_time: SystemTime,
    pub key_mod_time: SystemTime,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: String,
    pub key_path: String,
}

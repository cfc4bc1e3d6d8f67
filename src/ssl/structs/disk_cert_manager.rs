use crate::config::structs::serving_cert_file_config::ServingCertFileConfig;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::watch_state::WatchState;
use crate::ssl::traits::cert_logger::CertLogger;
use parking_lot::Mutex;
use std::sync::Arc;

pub struct DiskCertManager {
    pub(crate) config: ServingCertFileConfig,
    pub(crate) store: Arc<CertificateStore>,
    pub(crate) server_config: rustls::ServerConfig,
    pub(crate) logger: Arc<dyn CertLogger>,
    pub(crate) watch_state: Mutex<WatchState>,
}

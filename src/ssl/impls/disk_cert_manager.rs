use crate::config::structs::serving_cert_file_config::ServingCertFileConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::file_watch_event::FileWatchEvent;
use crate::ssl::ssl::create_server_config_with_resolver;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use crate::ssl::structs::disk_cert_manager::DiskCertManager;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::watch_state::WatchState;
use crate::ssl::traits::cert_logger::CertLogger;
use parking_lot::Mutex;
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

impl std::fmt::Debug for DiskCertManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskCertManager")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("watch_state", &*self.watch_state.lock())
            .finish()
    }
}

impl DiskCertManager {
    /// Builds a manager around an eagerly loaded certificate pair.
    ///
    /// Fails when no configuration is given or when the initial pair cannot
    /// be loaded; there is no serving without a valid certificate.
    pub fn new(
        config: Option<ServingCertFileConfig>,
        logger: Arc<dyn CertLogger>,
    ) -> Result<DiskCertManager, CertificateError> {
        let config = config.ok_or(CertificateError::ConfigurationMissing)?;
        config.validate()?;

        let bundle = CertificateBundle::load(&config.cert_file_path, &config.key_file_path)
            .map_err(|e| CertificateError::Load(Box::new(e)))?;
        let watch_state = WatchState::new(bundle.cert_mod_time, bundle.key_mod_time);
        let store = Arc::new(CertificateStore::new(bundle));
        let resolver = Arc::new(DynamicCertificateResolver::new(store.clone()));
        let server_config = create_server_config_with_resolver(resolver)?;

        Ok(DiskCertManager {
            config,
            store,
            server_config,
            logger,
            watch_state: Mutex::new(watch_state),
        })
    }

    /// TLS server configuration whose certificate resolver reads the live store.
    pub fn tls_config(&self) -> rustls::ServerConfig {
        self.server_config.clone()
    }

    pub fn current_certificate(&self) -> Arc<CertifiedKey> {
        self.store.current_key()
    }

    pub fn current_bundle(&self) -> Arc<CertificateBundle> {
        self.store.current()
    }

    pub fn config(&self) -> &ServingCertFileConfig {
        &self.config
    }

    /// Polls the certificate and key files until `shutdown` flips to `true`
    /// or its sender goes away.
    ///
    /// Each tick runs to completion before shutdown is looked at again, so a
    /// reload is never cut off halfway.
    pub async fn watch_file_changes(&self, mut shutdown: watch::Receiver<bool>) {
        let period = self.config.sync_interval();
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait_for(|stop| *stop) => {
                    self.logger.info("Stopping file watcher");
                    return;
                }
                _ = interval.tick() => {
                    self.sync_certificate_files();
                }
            }
        }
    }

    /// One poll tick: stat both files, reload when something changed or a
    /// previous attempt failed.
    pub fn sync_certificate_files(&self) -> FileWatchEvent {
        let (cert_mod_time, key_mod_time) = match self.stat_files() {
            Ok(mod_times) => mod_times,
            Err(error) => {
                self.logger.error(&format!("Failed to get file info, {}", error));
                self.watch_state.lock().mark_failed();
                return FileWatchEvent::StatFailed;
            }
        };

        let mut watch_state = self.watch_state.lock();
        if !watch_state.needs_reload(cert_mod_time, key_mod_time) {
            return FileWatchEvent::NoChange;
        }

        match CertificateBundle::load(&self.config.cert_file_path, &self.config.key_file_path) {
            Ok(bundle) => {
                watch_state.mark_loaded(bundle.cert_mod_time, bundle.key_mod_time);
                self.store.replace(bundle);
                self.logger.info("Loaded provided certificate with success");
                FileWatchEvent::Reloaded
            }
            Err(error) => {
                watch_state.mark_failed();
                self.logger.error(&format!("Failed to load certificate: {}", error));
                FileWatchEvent::LoadFailed
            }
        }
    }

    fn stat_files(&self) -> Result<(SystemTime, SystemTime), CertificateError> {
        let cert_mod_time = Self::stat_file(&self.config.cert_file_path)?;
        let key_mod_time = Self::stat_file(&self.config.key_file_path)?;
        Ok((cert_mod_time, key_mod_time))
    }

    fn stat_file(path: &str) -> Result<SystemTime, CertificateError> {
        CertificateBundle::file_mod_time(path).map_err(|source| CertificateError::FileStat {
            path: path.to_string(),
            source,
        })
    }
}

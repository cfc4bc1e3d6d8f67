use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_store::CertificateStore;
use parking_lot::RwLock;
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::SystemTime;

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateStore")
            .field("active", &*self.active.read())
            .finish()
    }
}

impl CertificateStore {
    pub fn new(bundle: CertificateBundle) -> Self {
        Self {
            active: RwLock::new(Arc::new(bundle)),
        }
    }

    /// Snapshot of the active bundle. The read lock only covers an `Arc` clone.
    pub fn current(&self) -> Arc<CertificateBundle> {
        self.active.read().clone()
    }

    pub fn current_key(&self) -> Arc<CertifiedKey> {
        self.active.read().certified_key.clone()
    }

    pub fn mod_times(&self) -> (SystemTime, SystemTime) {
        let active = self.active.read();
        (active.cert_mod_time, active.key_mod_time)
    }

    /// Swaps in a new bundle as one unit. Only the file watcher calls this.
    pub fn replace(&self, bundle: CertificateBundle) {
        let previous = std::mem::replace(&mut *self.active.write(), Arc::new(bundle));
        // Released outside the write lock.
        drop(previous);
    }
}

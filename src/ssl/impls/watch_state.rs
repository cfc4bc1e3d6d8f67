use crate::ssl::structs::watch_state::WatchState;
use std::time::SystemTime;

impl WatchState {
    pub fn new(cert_mod_time: SystemTime, key_mod_time: SystemTime) -> Self {
        Self {
            cert_mod_time,
            key_mod_time,
            reload_pending: false,
        }
    }

    pub fn needs_reload(&self, cert_mod_time: SystemTime, key_mod_time: SystemTime) -> bool {
        self.reload_pending || cert_mod_time != self.cert_mod_time || key_mod_time != self.key_mod_time
    }

    pub fn mark_loaded(&mut self, cert_mod_time: SystemTime, key_mod_time: SystemTime) {
        self.cert_mod_time = cert_mod_time;
        self.key_mod_time = key_mod_time;
        self.reload_pending = false;
    }

    /// Forces a reload attempt on the next tick that can stat both files.
    pub fn mark_failed(&mut self) {
        self.reload_pending = true;
    }
}

use std::time::SystemTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WatchState {
    pub cert_mod_time: SystemTime,
    pub key_mod_time: SystemTime,
    pub reload_pending: bool,
}

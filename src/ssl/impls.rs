pub mod certificate_bundle;
pub mod certificate_error;
pub mod certificate_store;
pub mod dynamic_certificate_resolver;
pub mod disk_cert_manager;
pub mod watch_state;
pub mod log_cert_logger;
pub mod memory_cert_logger;
pub mod cert_log_level;

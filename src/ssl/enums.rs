/// Errors raised while loading or watching certificates.
pub mod certificate_error;

/// Severity of a message emitted through the certificate logger.
pub mod cert_log_level;

/// Outcome of a single file watcher poll tick.
pub mod file_watch_event;

/// A parsed and validated certificate chain with its signing key.
pub mod certificate_bundle;

/// Holder of the active certificate bundle.
pub mod certificate_store;

/// rustls certificate resolver reading from the store.
pub mod dynamic_certificate_resolver;

/// Facade composing the loader, store, resolver and file watcher.
pub mod disk_cert_manager;

/// File watcher bookkeeping between poll ticks.
pub mod watch_state;

/// Certificate logger forwarding to the `log` facade.
pub mod log_cert_logger;

/// Certificate logger collecting entries in memory.
pub mod memory_cert_logger;

/// A single collected log entry.
pub mod log_entry;

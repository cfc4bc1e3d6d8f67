//! SSL/TLS serving certificate management module.
//!
//! This module keeps a single TLS serving certificate loaded from disk and
//! swaps it at runtime whenever the certificate or key file changes, without
//! interrupting TLS handshakes that are already running.
//!
//! # Features
//!
//! - Fail-fast construction: no serving without a valid initial pair
//! - Hot-reload of certificate and key by polling file modification times
//! - Lock-light certificate resolution on the handshake path
//! - Bad files on disk are logged and ignored, the last valid pair keeps serving
//!
//! # Components
//!
//! - [`structs::certificate_bundle::CertificateBundle`] - a parsed, validated pair
//! - [`structs::certificate_store::CertificateStore`] - the active pair, swapped atomically
//! - [`structs::dynamic_certificate_resolver::DynamicCertificateResolver`] - rustls resolver
//! - [`structs::disk_cert_manager::DiskCertManager`] - facade and file watcher
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use oidc_discovery_certs::ssl::structs::disk_cert_manager::DiskCertManager;
//! use oidc_discovery_certs::ssl::structs::log_cert_logger::LogCertLogger;
//!
//! let manager = Arc::new(DiskCertManager::new(config.serving_cert_file.clone(), Arc::new(LogCertLogger))?);
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! tokio::spawn({
//!     let manager = manager.clone();
//!     async move { manager.watch_file_changes(shutdown_rx).await }
//! });
//! let tls_config = manager.tls_config();
//! ```

/// Certificate error and watcher enumerations.
pub mod enums;

/// Data structures for certificate storage and resolution.
pub mod structs;

/// Implementation blocks for the certificate types.
pub mod impls;

/// Logging capability used by the certificate manager.
pub mod traits;

/// Helper functions for server configuration and self-signed certificates.
#[allow(clippy::module_inception)]
pub mod ssl;

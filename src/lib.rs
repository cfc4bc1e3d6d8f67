//! # OIDC Discovery Serving Certificates
//!
//! A disk-backed TLS serving certificate manager for an OIDC discovery
//! endpoint, with a small HTTPS listener on top of it.
//!
//! ## Overview
//!
//! The certificate and private key live as PEM files on disk, usually
//! rotated by an external process. The manager loads them once at startup
//! (refusing to start if they are unusable), hands rustls a certificate
//! resolver that always returns the active pair, and polls the files in the
//! background, swapping in a new pair whenever both files load cleanly.
//!
//! ## Features
//!
//! - **Fail-fast startup**: missing configuration, missing files or bad PEM stop the process
//! - **Hot reload**: certificate and key changes picked up without a restart
//! - **Self-healing**: broken or missing files are logged every tick, the last good pair keeps serving
//! - **Atomic rotation**: a handshake never sees a certificate from one generation with a key from another
//! - **Cooperative shutdown**: the watcher stops on a `tokio::sync::watch` signal
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use oidc_discovery_certs::config::structs::configuration::Configuration;
//! use oidc_discovery_certs::ssl::structs::disk_cert_manager::DiskCertManager;
//! use oidc_discovery_certs::ssl::structs::log_cert_logger::LogCertLogger;
//!
//! let config = Configuration::load_file("config.toml")?;
//! let manager = Arc::new(DiskCertManager::new(config.serving_cert_file.clone(), Arc::new(LogCertLogger))?);
//! let tls_config = manager.tls_config();
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTPS listener wired to the certificate manager
//! - [`ssl`] - Certificate loading, storage, resolution and file watching
//! - [`structs`] - CLI argument parsing

/// Common utilities and shared functionality.
///
/// Contains logging setup and the message-only error type used during boot.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTPS listener for the discovery endpoint.
///
/// Serves health probes over TLS using the certificate manager's
/// server configuration.
pub mod http;

/// SSL/TLS serving certificate management module.
///
/// Provides the certificate loader, the atomically swapped certificate
/// store, the rustls resolver and the polling file watcher.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;

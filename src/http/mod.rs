//! HTTPS listener for the discovery endpoint.
//!
//! The listener takes its TLS configuration from the
//! [`DiskCertManager`](crate::ssl::structs::disk_cert_manager::DiskCertManager),
//! so every new connection is served the certificate that is active at
//! handshake time.
//!
//! # Endpoints
//!
//! - `GET /live` - liveness probe
//! - `GET /ready` - readiness probe, reports when the active certificate was loaded

/// Core HTTPS service implementation.
#[allow(clippy::module_inception)]
pub mod http;

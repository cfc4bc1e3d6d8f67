//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Serving certificate file locations and poll interval.
pub mod serving_cert_file_config;

/// HTTPS listener configuration.
pub mod https_server_config;

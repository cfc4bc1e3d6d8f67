//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **serving_cert_file**: certificate/key paths and the file sync interval
//! - **server**: HTTPS listener settings for the discovery endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use oidc_discovery_certs::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_file("config.toml")?;
//!
//! // Generate default configuration
//! let config_toml = toml::to_string(&Configuration::init())?;
//! Configuration::save_file("config.toml", config_toml)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the crate.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher over the `log` facade)
//! - Log level parsing
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type for boot-time failures

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

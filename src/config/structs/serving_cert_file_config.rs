use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServingCertFileConfig {
    pub cert_file_path: String,
    pub key_file_path: String,
    /// Poll interval in milliseconds; zero or absent falls back to the default.
    #[serde(default, with = "serde_millis")]
    pub file_sync_interval: Duration
}

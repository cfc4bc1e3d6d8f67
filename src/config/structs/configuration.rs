use serde::{Deserialize, Serialize};
use crate::config::structs::https_server_config::HttpsServerConfig;
use crate::config::structs::serving_cert_file_config::ServingCertFileConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub serving_cert_file: Option<ServingCertFileConfig>,
    pub server: HttpsServerConfig
}

use std::net::SocketAddr;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::https_server_config::HttpsServerConfig;

impl Default for HttpsServerConfig {
    fn default() -> Self {
        HttpsServerConfig {
            bind_address: String::from("0.0.0.0:8443"),
            workers: Some(2),
            keep_alive: Some(60),
            request_timeout: Some(15),
            disconnect_timeout: Some(15)
        }
    }
}

impl HttpsServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigurationError> {
        self.bind_address.parse::<SocketAddr>().map_err(|e| {
            ConfigurationError::ValidationError(format!("bind_address \"{}\": {}", self.bind_address, e))
        })
    }
}

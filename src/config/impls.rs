pub mod configuration;
pub mod configuration_error;
pub mod serving_cert_file_config;
pub mod https_server_config;

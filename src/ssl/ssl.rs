use crate::common::structs::custom_error::CustomError;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use log::{error, info};
use rcgen::{CertificateParams, KeyPair};
use std::fs;
use std::sync::Arc;

pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
) -> Result<rustls::ServerConfig, CertificateError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let builder = rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| CertificateError::ServerConfig(e.to_string()))?;
    Ok(builder
        .with_no_client_auth()
        .with_cert_resolver(resolver))
}

/// Writes a self-signed ECDSA P-256 certificate and PKCS#8 key for local use.
pub fn generate_self_signed(domain: &str, key_path: &str, cert_path: &str) -> Result<(), CustomError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" && !domain.is_empty() {
        subject_alt_names.push(domain.to_string());
    }

    let key_pair = KeyPair::generate()
        .map_err(|e| CustomError::new(&format!("unable to generate key pair: {}", e)))?;
    let cert = CertificateParams::new(subject_alt_names)
        .and_then(|params| params.self_signed(&key_pair))
        .map_err(|e| CustomError::new(&format!("unable to generate certificate: {}", e)))?;

    if let Err(e) = fs::write(key_path, key_pair.serialize_pem()) {
        error!("[CERTGEN] The key file {} could not be generated!", key_path);
        return Err(CustomError::new(&e.to_string()));
    }
    info!("[CERTGEN] The key file {} has been generated", key_path);

    if let Err(e) = fs::write(cert_path, cert.pem()) {
        error!("[CERTGEN] The cert file {} could not be generated!", cert_path);
        return Err(CustomError::new(&e.to_string()));
    }
    info!("[CERTGEN] The cert file {} has been generated", cert_path);

    info!("[CERTGEN] The files {} and {} has been generated, use them only for development reasons", key_path, cert_path);
    Ok(())
}

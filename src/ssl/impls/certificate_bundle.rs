use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use rustls::crypto::ring::sign::any_supported_type;
use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer,
    PrivatePkcs1KeyDer,
    PrivateSec1KeyDer
};
use rustls::sign::{CertifiedKey, SigningKey};
use std::fs;
use std::sync::Arc;
use std::time::SystemTime;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certified_key.cert.len())
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("cert_mod_time", &self.cert_mod_time)
            .field("key_mod_time", &self.key_mod_time)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    /// Loads and validates a PEM certificate chain and private key pair.
    ///
    /// Modification times are taken before the contents are read, so a file
    /// rewritten while loading shows up as changed on the next poll.
    pub fn load(cert_path: &str, key_path: &str) -> Result<CertificateBundle, CertificateError> {
        let cert_mod_time = Self::file_mod_time(cert_path)
            .map_err(|e| CertificateError::from_io(cert_path, e))?;
        let key_mod_time = Self::file_mod_time(key_path)
            .map_err(|e| CertificateError::from_io(key_path, e))?;
        let cert_pem = fs::read(cert_path)
            .map_err(|e| CertificateError::from_io(cert_path, e))?;
        let key_pem = fs::read(key_path)
            .map_err(|e| CertificateError::from_io(key_path, e))?;

        let certified_key = Self::parse_key_pair(&cert_pem, &key_pem)?;
        Ok(CertificateBundle {
            certified_key: Arc::new(certified_key),
            cert_mod_time,
            key_mod_time,
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    pub fn file_mod_time(path: &str) -> std::io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    pub fn parse_key_pair(cert_pem: &[u8], key_pem: &[u8]) -> Result<CertifiedKey, CertificateError> {
        let certs = Self::parse_certificates(cert_pem)?;
        let key = Self::parse_private_key(key_pem)?;
        let signing_key = Self::signing_key(&key)?;
        let certified_key = CertifiedKey::new(certs, signing_key);
        Self::check_key_pair(&certified_key)?;
        Ok(certified_key)
    }

    pub fn end_entity_der(&self) -> &[u8] {
        self.certified_key.cert[0].as_ref()
    }

    fn parse_certificates(pem: &[u8]) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
        let mut reader = pem;
        let certs = rustls_pemfile::certs(&mut reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::CertificateLoad(format!("failed to parse certificate input: {}", e)))?;
        if certs.is_empty() {
            return Err(CertificateError::CertificateLoad(
                "failed to find any PEM data in certificate input".to_string(),
            ));
        }
        Ok(certs)
    }

    fn parse_private_key(pem: &[u8]) -> Result<PrivateKeyDer<'static>, CertificateError> {
        let mut reader = pem;
        match rustls_pemfile::private_key(&mut reader) {
            Ok(Some(key)) => Ok(key),
            Ok(None) => Err(CertificateError::CertificateLoad(
                "failed to find any PEM data in key input".to_string(),
            )),
            Err(e) => Err(CertificateError::CertificateLoad(format!("failed to parse key input: {}", e))),
        }
    }

    /// Builds the signing key. A `PRIVATE KEY` block is retried as SEC1 and
    /// then PKCS#1, since some tools write those bodies under that label.
    fn signing_key(key: &PrivateKeyDer<'_>) -> Result<Arc<dyn SigningKey>, CertificateError> {
        let error = match any_supported_type(key) {
            Ok(signing_key) => return Ok(signing_key),
            Err(e) => e,
        };
        if let PrivateKeyDer::Pkcs8(pkcs8) = key {
            let der = pkcs8.secret_pkcs8_der();
            let candidates = [
                PrivateKeyDer::Sec1(PrivateSec1KeyDer::from(der)),
                PrivateKeyDer::Pkcs1(PrivatePkcs1KeyDer::from(der)),
            ];
            for candidate in candidates.iter() {
                if let Ok(signing_key) = any_supported_type(candidate) {
                    return Ok(signing_key);
                }
            }
        }
        Err(CertificateError::CertificateLoad(format!("unsupported private key: {}", error)))
    }

    fn check_key_pair(certified_key: &CertifiedKey) -> Result<(), CertificateError> {
        match certified_key.keys_match() {
            Ok(()) => Ok(()),
            // The signing key cannot report its public half, nothing to compare against.
            Err(rustls::Error::InconsistentKeys(rustls::InconsistentKeys::Unknown)) => Ok(()),
            Err(rustls::Error::InconsistentKeys(_)) => Err(CertificateError::CertificateLoad(
                "private key does not match public key".to_string(),
            )),
            Err(e) => Err(CertificateError::CertificateLoad(format!("failed to parse certificate: {}", e))),
        }
    }
}

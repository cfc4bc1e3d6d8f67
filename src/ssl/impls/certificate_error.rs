use crate::ssl::enums::certificate_error::CertificateError;

impl CertificateError {
    pub(crate) fn from_io(path: &str, error: std::io::Error) -> CertificateError {
        match error.kind() {
            std::io::ErrorKind::NotFound => CertificateError::FileNotFound {
                path: path.to_string(),
                source: error,
            },
            _ => CertificateError::FileRead {
                path: path.to_string(),
                source: error,
            },
        }
    }

    pub fn is_file_not_found(&self) -> bool {
        match self {
            CertificateError::FileNotFound { .. } => true,
            CertificateError::FileStat { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            CertificateError::Load(inner) => inner.is_file_not_found(),
            _ => false,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("missing serving cert file configuration")]
    ConfigurationMissing,
    #[error("invalid serving cert file configuration: {0}")]
    InvalidConfiguration(String),
    #[error("open {path}: {source}")]
    FileNotFound {
        path: String,
        source: std::io::Error,
    },
    #[error("read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("{0}")]
    CertificateLoad(String),
    #[error("{}", crate::ssl::enums::certificate_error::describe_stat_failure(.path, .source))]
    FileStat {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to load certificate: {0}")]
    Load(#[source] Box<CertificateError>),
    #[error("failed to build server configuration: {0}")]
    ServerConfig(String),
}

pub(crate) fn describe_stat_failure(path: &str, source: &std::io::Error) -> String {
    match source.kind() {
        std::io::ErrorKind::NotFound => format!(
            "file path {:?} does not exist anymore; please check if the path is correct",
            path
        ),
        _ => format!("file path {:?}: {}", path, source),
    }
}

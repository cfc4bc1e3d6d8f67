#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum CertLogLevel {
    Info,
    Error,
}

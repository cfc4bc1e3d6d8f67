/// Logging capability injected into the certificate manager.
pub mod cert_logger;

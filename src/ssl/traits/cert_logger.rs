/// Sink for the messages the certificate manager emits.
///
/// Messages are passed through verbatim; implementations may add a prefix
/// but must not rewrite the text.
pub trait CertLogger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

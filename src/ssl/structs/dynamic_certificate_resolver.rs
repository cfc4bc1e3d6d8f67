use crate::ssl::structs::certificate_store::CertificateStore;
use std::sync::Arc;

pub struct DynamicCertificateResolver {
    pub(crate) store: Arc<CertificateStore>,
}

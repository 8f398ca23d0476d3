use crate::domain::error::TranslateError;
use crate::domain::model::{HttpRequest, ResponseEnvelope, TranslationRequest};
use async_trait::async_trait;

/// HTTP capability supplied by the host.
///
/// Implementations own serialization of the JSON body, timeouts, TLS and
/// proxying. A non-2xx status is not an error at this level: it is reported
/// through [`ResponseEnvelope::ok`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        url: &str,
        request: HttpRequest,
    ) -> Result<ResponseEnvelope, TranslateError>;
}

/// Trait for translation services
///
/// Lets callers hold a provider without knowing how it reaches the vendor.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one request into plain text
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}

use crate::application::translate::translate;
use crate::domain::error::TranslateError;
use crate::domain::model::{HttpRequest, RequestBody, ResponseEnvelope, TranslationRequest};
use crate::domain::traits::{Transport, Translator};
use crate::infrastructure::config::QwenConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Production transport backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        request: HttpRequest,
    ) -> Result<ResponseEnvelope, TranslateError> {
        let mut builder = self.client.request(request.method.clone(), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match &request.body {
            RequestBody::Json(payload) => builder.json(payload),
        };

        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "qwen request finished"
        );

        // 非 JSON 响应（例如网关错误页）按原始文本保留
        let data = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

        Ok(ResponseEnvelope {
            ok: status.is_success(),
            status: status.as_u16(),
            data,
        })
    }
}

/// Qwen translator bound to one configuration and transport.
#[derive(Clone)]
pub struct QwenTranslator {
    config: QwenConfig,
    transport: Arc<dyn Transport>,
}

impl QwenTranslator {
    pub fn new(config: QwenConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &QwenConfig {
        &self.config
    }
}

#[async_trait]
impl Translator for QwenTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        translate(request, &self.config, self.transport.as_ref()).await
    }
}

use crate::domain::error::TranslateError;
use crate::domain::model::{
    ChatMessage, HttpRequest, ModelSelection, RequestBody, RequestPayload, TranslationOptions,
    TranslationRequest,
};
use crate::domain::traits::Transport;
use crate::infrastructure::config::QwenConfig;
use serde_json::Value;

/// DashScope OpenAI-compatible chat completions endpoint.
pub const QWEN_ENDPOINT: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions";

/// Translate `request` through the Qwen chat-completions API.
///
/// Exactly one call is made on `transport`, and none when the API key is
/// missing. Nothing is retried; every failure ends the call.
pub async fn translate<T>(
    request: &TranslationRequest,
    config: &QwenConfig,
    transport: &T,
) -> Result<String, TranslateError>
where
    T: Transport + ?Sized,
{
    let api_key = match config.api_key.as_deref() {
        Some(key) if !key.is_empty() => key,
        _ => {
            return Err(TranslateError::Config(
                "API key missing, please set your Qwen API key".to_string(),
            ))
        }
    };

    let model = ModelSelection::resolve(config.model_name.as_deref());
    let payload = build_payload(&model, request);

    let http_request = HttpRequest {
        method: reqwest::Method::POST,
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), format!("Bearer {}", api_key)),
        ],
        body: RequestBody::Json(serde_json::to_value(&payload)?),
    };

    let response = transport.send(QWEN_ENDPOINT, http_request).await?;

    if !response.ok {
        return Err(TranslateError::Http {
            status: response.status,
            body: response.data.to_string(),
        });
    }

    match extract_content(&response.data) {
        Some(content) => Ok(content.to_string()),
        None => Err(TranslateError::UnexpectedResponse {
            body: response.data.to_string(),
        }),
    }
}

/// Build the chat payload; `translation_options` is only attached for
/// `qwen-mt-*` models. Language codes are passed through untouched.
pub fn build_payload(model: &ModelSelection, request: &TranslationRequest) -> RequestPayload {
    let translation_options = model.is_translation_model().then(|| TranslationOptions {
        source_lang: request.source_lang.clone(),
        target_lang: request.target_lang.clone(),
    });

    RequestPayload {
        model: model.name().to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: request.text.clone(),
        }],
        translation_options,
    }
}

/// `choices[0].message.content`, if present and a non-empty string.
pub fn extract_content(data: &Value) -> Option<&str> {
    data.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .filter(|content| !content.is_empty())
}

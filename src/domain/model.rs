use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "qwen-mt-turbo";

/// Models under this prefix take structured `translation_options`
/// instead of plain chat prompting.
pub const TRANSLATION_MODEL_PREFIX: &str = "qwen-mt-";

// 单次翻译请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Effective model name after default substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection(String);

impl ModelSelection {
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self(DEFAULT_MODEL.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_translation_model(&self) -> bool {
        self.0.starts_with(TRANSLATION_MODEL_PREFIX)
    }
}

// 发送给 DashScope 的请求体
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_options: Option<TranslationOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationOptions {
    pub source_lang: String,
    pub target_lang: String,
}

/// Body descriptor handed to the transport, serialized as
/// `{ "type": "Json", "payload": ... }`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum RequestBody {
    Json(Value),
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: reqwest::Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// 传输层返回结果：状态 + 已解析的响应体
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub ok: bool,
    pub status: u16,
    pub data: Value,
}

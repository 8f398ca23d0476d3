//! Translate text with Qwen models over DashScope's OpenAI-compatible API.
//!
//! The core is [`application::translate::translate`]: it checks the
//! configuration, builds the request payload, hands it to a [`Transport`]
//! and unpacks `choices[0].message.content` from the reply.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;

pub use application::translate::{translate, QWEN_ENDPOINT};
pub use domain::error::{ErrorKind, TranslateError};
pub use domain::model::{
    HttpRequest, ModelSelection, RequestBody, RequestPayload, ResponseEnvelope,
    TranslationRequest, DEFAULT_MODEL, TRANSLATION_MODEL_PREFIX,
};
pub use domain::traits::{Transport, Translator};
pub use infrastructure::config::QwenConfig;
pub use infrastructure::network::client::{QwenTranslator, ReqwestTransport};

use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::{QwenTranslator, ReqwestTransport};
use crate::infrastructure::network::http::create_client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: QwenTranslator,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TranslateError> {
        let transport = ReqwestTransport::new(create_client(&config)?);
        let translator = QwenTranslator::new(config.qwen.clone(), Arc::new(transport));

        Ok(Self {
            config: Arc::new(config),
            translator,
        })
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Qwen API Http Request Error\nHttp Status: {status}\n{body}")]
    Http { status: u16, body: String },

    #[error("Qwen API Error: no translated content found in response.\nResponse: {body}")]
    UnexpectedResponse { body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Coarse classification of a [`TranslateError`], for hosts that branch on
/// the failure without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Http,
    UnexpectedResponseShape,
    Transport,
    Internal,
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Http { .. } => ErrorKind::Http,
            Self::UnexpectedResponse { .. } => ErrorKind::UnexpectedResponseShape,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Json(_) | Self::Io(_) | Self::Toml(_) => ErrorKind::Internal,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

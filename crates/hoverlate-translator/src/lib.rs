mod baidu;

pub use baidu::{BaiduTranslator, SUCCESS_CODE, parse_response, sign};

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text using the configured language pair
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated lines in reply order
    pub segments: Vec<String>,
}

impl Translation {
    /// Segments joined by newlines, trailing whitespace trimmed
    pub fn text(&self) -> String {
        self.segments.join("\n").trim_end().to_string()
    }
}

/// Display output is the user-visible overlay message
#[derive(Debug, Clone, thiserror::Error)]
pub enum TranslateError {
    #[error("Error: AppID not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("API error {code}: {message}")]
    ApiError { code: String, message: String },
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        TranslateError::NetworkError(e.to_string())
    }
}

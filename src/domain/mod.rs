use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0}")]
    Message(String),
}

/// Arguments to the `summarize_url` tool. `words` is a hint for the
/// backend, never enforced on output length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub url: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default = "default_words")]
    pub words: u32,
}

pub const DEFAULT_WORDS: u32 = 200;

fn default_words() -> u32 {
    DEFAULT_WORDS
}

impl SummaryRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            focus: String::new(),
            words: DEFAULT_WORDS,
        }
    }
}

#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply_on_deserialize() {
        let req: SummaryRequest =
            serde_json::from_str(r#"{"url":"https://example.com"}"#).unwrap();
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.focus, "");
        assert_eq!(req.words, 200);
    }

    #[test]
    fn request_new_uses_defaults() {
        let req = SummaryRequest::new("https://example.com/a");
        assert_eq!(req.words, DEFAULT_WORDS);
        assert!(req.focus.is_empty());
    }
}

//! Chat-completions summarization backend (OpenAI-compatible API).

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infra::config::LlmConfig;
use crate::infra::http::headers::add_standard_headers;
use crate::pipeline::{PipelineError, SummarizationBackend};

#[derive(Clone)]
pub struct OpenAiBackend {
    base: String,
    api_key: String,
    model: String,
    timeout: Option<Duration>,
    http: Client,
}

impl OpenAiBackend {
    pub fn new(
        base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            api_key: api_key.into(),
            model: model.into(),
            timeout: None,
            http: Client::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Build a backend from config. Without an API key the service still runs,
/// but generation reports a clear cause instead of partial output.
pub fn backend_from_config(cfg: &LlmConfig) -> Arc<dyn SummarizationBackend> {
    match cfg.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => Arc::new(
            OpenAiBackend::new(cfg.base_url.clone(), key, cfg.model.clone())
                .with_timeout(cfg.timeout_secs.map(Duration::from_secs)),
        ),
        _ => Arc::new(UnconfiguredBackend),
    }
}

#[derive(Serialize)]
struct ChatReq<'a> {
    model: &'a str,
    messages: Vec<ChatMsg<'a>>,
}

#[derive(Serialize)]
struct ChatMsg<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResp {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatRespMsg,
}

#[derive(Deserialize)]
struct ChatRespMsg {
    content: String,
}

#[async_trait::async_trait]
impl SummarizationBackend for OpenAiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, PipelineError> {
        let url = format!("{}/v1/chat/completions", self.base.trim_end_matches('/'));
        let payload = ChatReq {
            model: &self.model,
            messages: vec![ChatMsg {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(endpoint = %url, model = %self.model, "chat completion request");
        let start = Instant::now();

        let (builder, _rid) = add_standard_headers(self.http.post(&url), None);
        let mut builder = builder.bearer_auth(&self.api_key).json(&payload);
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }

        let result = async {
            let resp = builder.send().await.map_err(|e| backend_err(e.to_string()))?;
            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(backend_err(format!(
                    "status {status}: {}",
                    body.chars().take(200).collect::<String>()
                )));
            }
            let parsed = resp
                .json::<ChatResp>()
                .await
                .map_err(|e| backend_err(format!("malformed response: {e}")))?;
            parsed
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or_else(|| backend_err("response contained no choices".into()))
        }
        .await;

        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("summarize_url", "llm_latency_ms", elapsed_ms);
        if result.is_err() {
            crate::infra::logging::log_metric("summarize_url", "llm_error_total", 1.0);
        }
        result
    }
}

fn backend_err(cause: String) -> PipelineError {
    PipelineError::Backend { cause }
}

/// Stands in when no API key is configured, so the service stays up and
/// clients get actionable feedback.
pub struct UnconfiguredBackend;

#[async_trait::async_trait]
impl SummarizationBackend for UnconfiguredBackend {
    async fn generate(&self, _prompt: &str) -> Result<String, PipelineError> {
        Err(backend_err(
            "OPENAI_API_KEY not configured; set it to enable summarize_url".into(),
        ))
    }
}

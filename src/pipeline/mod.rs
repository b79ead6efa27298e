//! The `summarize_url` pipeline: fetch, extract, normalize, truncate,
//! prompt, generate, wrap.
//!
//! Fetch and generation are the only failure sources; extraction and
//! normalization degrade via fallback instead of erroring. Nothing here
//! holds state across requests and no stage retries.

pub mod extract;
pub mod fetch;
pub mod prompt;
pub mod text;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SummaryRequest;
use fetch::Fetcher;

/// Stage-tagged pipeline failure. The wire form is `<class>: <cause>` so
/// callers can distinguish retrieval failures from generation failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fetch_failed: {cause}")]
    Fetch { cause: String, status: Option<u16> },
    #[error("llm_failed: {cause}")]
    Backend { cause: String },
}

impl PipelineError {
    pub fn class(&self) -> &'static str {
        match self {
            PipelineError::Fetch { .. } => "fetch_failed",
            PipelineError::Backend { .. } => "llm_failed",
        }
    }
}

/// Text-generation backend seam, so tools and tests can swap the real
/// chat-completions client for a stub.
#[async_trait::async_trait]
pub trait SummarizationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, PipelineError>;
}

/// The tool's observable result: every outcome is data, no error escapes
/// this envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummaryOutcome {
    pub fn success(summary: String) -> Self {
        Self {
            ok: true,
            summary: Some(summary),
            error: None,
        }
    }

    pub fn failure(err: &PipelineError) -> Self {
        Self {
            ok: false,
            summary: None,
            error: Some(err.to_string()),
        }
    }
}

pub struct SummaryPipeline {
    fetcher: Fetcher,
    backend: Arc<dyn SummarizationBackend>,
}

impl SummaryPipeline {
    pub fn new(fetcher: Fetcher, backend: Arc<dyn SummarizationBackend>) -> Self {
        Self { fetcher, backend }
    }

    /// Deterministic half of the pipeline: main-content extraction,
    /// normalization, and the 12k character bound. Same HTML in, same
    /// text out.
    pub fn prepare_page_text(html: &str, url: &str) -> String {
        let fragment = extract::extract(html, url);
        let normalized = text::normalize_with_fallback(&fragment, html);
        prompt::truncate(&normalized)
    }

    pub async fn run(&self, req: &SummaryRequest) -> SummaryOutcome {
        let page = match self.fetcher.fetch(&req.url).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(url = %req.url, error = %e, "fetch stage failed");
                return SummaryOutcome::failure(&e);
            }
        };
        let bounded = Self::prepare_page_text(&page.body, &req.url);
        let prompt = prompt::build(&bounded, req.words, &req.focus);
        match self.backend.generate(&prompt).await {
            Ok(summary) => {
                tracing::debug!(url = %req.url, chars = bounded.len(), "summary generated");
                SummaryOutcome::success(summary)
            }
            Err(e) => {
                tracing::warn!(url = %req.url, error = %e, "generation stage failed");
                SummaryOutcome::failure(&e)
            }
        }
    }
}

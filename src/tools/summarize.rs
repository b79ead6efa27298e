use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{SummaryRequest, Tool, ToolError, DEFAULT_WORDS};
use crate::pipeline::SummaryPipeline;

#[derive(Clone)]
pub struct SummarizeTool {
    pipeline: Arc<SummaryPipeline>,
}

impl SummarizeTool {
    pub fn new(pipeline: Arc<SummaryPipeline>) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Tool for SummarizeTool {
    fn name(&self) -> &'static str {
        "summarize_url"
    }
    fn description(&self) -> &'static str {
        "Summarize a URL in ~200 words"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({
          "type": "object",
          "properties": {
            "url":   { "type": "string" },
            "focus": { "type": "string", "default": "" },
            "words": { "type": "integer", "default": DEFAULT_WORDS }
          },
          "required": ["url"]
        })
    }
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let Some(url) = arguments.get("url").and_then(|v| v.as_str()) else {
            return Err(ToolError::Message("missing 'url'".into()));
        };
        let focus = arguments
            .get("focus")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_owned();
        let words = arguments
            .get("words")
            .and_then(|v| v.as_u64())
            .map(|w| w as u32)
            .unwrap_or(DEFAULT_WORDS);

        let req = SummaryRequest {
            url: url.to_owned(),
            focus,
            words,
        };
        let outcome = self.pipeline.run(&req).await;
        serde_json::to_value(outcome).map_err(|e| ToolError::Message(e.to_string()))
    }
}

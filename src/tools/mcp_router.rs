//! MCP tool router: exposes `add_numbers` and `summarize_url` to rmcp
//! transports (streamable HTTP and stdio). Tool results are plain JSON in
//! `structuredContent`, matching the REST shim's shapes.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::JsonObject;
use rmcp::ErrorData as McpError;

use crate::domain::{SummaryRequest, DEFAULT_WORDS};
use crate::infra::runtime::mcp_transport::ServerHandler;
use crate::pipeline::SummaryPipeline;

#[derive(Clone)]
pub struct GatewaySvc {
    pipeline: Arc<SummaryPipeline>,
}

impl GatewaySvc {
    pub fn new(pipeline: Arc<SummaryPipeline>) -> Self {
        Self { pipeline }
    }
}

impl ServerHandler for GatewaySvc {}

#[rmcp::tool_router]
impl GatewaySvc {
    #[rmcp::tool(name = "add_numbers", description = "Add two numbers together")]
    async fn add_numbers(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        let x = params
            .0
            .get("x")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| McpError::invalid_params("missing required field: x", None))?;
        let y = params
            .0
            .get("y")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| McpError::invalid_params("missing required field: y", None))?;
        Ok(rmcp::Json(serde_json::json!({ "result": x + y })))
    }

    #[rmcp::tool(name = "summarize_url", description = "Summarize a URL in ~200 words")]
    async fn summarize_url(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<rmcp::Json<serde_json::Value>, McpError> {
        let url = params
            .0
            .get("url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("missing required field: url", None))?
            .to_owned();
        let focus = params
            .0
            .get("focus")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_owned();
        let words = params
            .0
            .get("words")
            .and_then(|v| v.as_u64())
            .map(|w| w as u32)
            .unwrap_or(DEFAULT_WORDS);

        let req = SummaryRequest { url, focus, words };
        let outcome = self.pipeline.run(&req).await;
        let payload =
            serde_json::to_value(outcome).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(rmcp::Json(payload))
    }
}

/// Build the handler + router pair the rmcp transports expect. The
/// pipeline is constructed once at boot and shared; sessions never read
/// ambient configuration.
pub fn factory_with_pipeline(
    pipeline: Arc<SummaryPipeline>,
) -> (GatewaySvc, ToolRouter<GatewaySvc>) {
    let handler = GatewaySvc::new(pipeline);
    let tools = GatewaySvc::tool_router();
    (handler, tools)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fetch::Fetcher;
    use crate::pipeline::{PipelineError, SummarizationBackend};
    use serde_json::{json, Value as JsonValue};

    struct FixedBackend;

    #[async_trait::async_trait]
    impl SummarizationBackend for FixedBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, PipelineError> {
            Ok("stub summary".into())
        }
    }

    fn svc() -> GatewaySvc {
        GatewaySvc::new(Arc::new(SummaryPipeline::new(
            Fetcher::new(),
            Arc::new(FixedBackend),
        )))
    }

    fn obj(v: JsonValue) -> Parameters<JsonObject> {
        Parameters(v.as_object().unwrap().clone())
    }

    #[tokio::test]
    async fn add_numbers_returns_sum() {
        let rmcp::Json(out) = svc().add_numbers(obj(json!({"x": 2, "y": 3}))).await.unwrap();
        assert_eq!(out["result"], 5.0);
    }

    #[tokio::test]
    async fn add_numbers_missing_operand_is_invalid_params() {
        let err = svc().add_numbers(obj(json!({"x": 2}))).await.err().unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("missing required field: y"));
    }

    #[tokio::test]
    async fn summarize_url_missing_url_is_invalid_params() {
        let err = svc().summarize_url(obj(json!({}))).await.err().unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("missing required field: url"));
    }

    #[tokio::test]
    async fn summarize_url_wraps_pipeline_failures_as_data() {
        let rmcp::Json(out) = svc()
            .summarize_url(obj(json!({"url": "http://127.0.0.1:1/x"})))
            .await
            .unwrap();
        assert_eq!(out["ok"], false);
        assert!(out["error"].as_str().unwrap().starts_with("fetch_failed"));
    }

    #[test]
    fn tool_router_lists_both_tools() {
        let router: ToolRouter<GatewaySvc> = GatewaySvc::tool_router();
        let names: Vec<String> = router.into_iter().map(|r| r.name().to_string()).collect();
        assert!(names.iter().any(|n| n == "add_numbers"), "got: {names:?}");
        assert!(names.iter().any(|n| n == "summarize_url"), "got: {names:?}");
    }
}

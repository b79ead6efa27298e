use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::infra::runtime::mcp_transport::{make_streamable_http_service, LocalSessionManager};
use crate::pipeline::SummaryPipeline;
use crate::tools::mcp_router;
use crate::tools::registry::Registry;

/// Default app: `/healthz` + streamable MCP at `/mcp`. The pipeline is
/// built once by the caller; sessions share it and never re-read
/// configuration.
pub fn build_app_default(pipeline: Arc<SummaryPipeline>) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let factory = move || mcp_router::factory_with_pipeline(pipeline.clone());
    let mcp_service = make_streamable_http_service(factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Default app **plus** the deprecated JSON-RPC REST route at `/v1/tools/rpc`.
pub fn build_app_with_rest(pipeline: Arc<SummaryPipeline>, registry: Registry) -> Router {
    let session_mgr = Arc::new(LocalSessionManager::default());
    let factory = move || mcp_router::factory_with_pipeline(pipeline.clone());
    let mcp_service = make_streamable_http_service(factory, session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
        .route("/v1/tools/rpc", post(crate::api::mcp::http))
        .with_state(registry)
}

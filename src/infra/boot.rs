use std::sync::Arc;

use crate::clients::openai::backend_from_config;
use crate::infra::config::Config;
use crate::pipeline::fetch::Fetcher;
use crate::pipeline::SummaryPipeline;
use crate::tools::mcp_router;
use crate::tools::registry::build_registry;

pub async fn run_server() -> anyhow::Result<()> {
    let cfg = Config::from_env_and_toml();
    tracing::info!(
        mode = %cfg.mode,
        host = %cfg.host,
        port = cfg.port,
        model = %cfg.llm.model,
        deprecate_rest = cfg.deprecate_rest,
        "BOOT summary-mcp-gateway"
    );

    // Configuration is read once, here; everything downstream gets the
    // constructed pipeline and never touches the environment again.
    let pipeline = Arc::new(SummaryPipeline::new(
        Fetcher::new(),
        backend_from_config(&cfg.llm),
    ));

    // Stdio mode: run MCP over stdio ONLY (no HTTP).
    if cfg.mode == "stdio" {
        crate::infra::runtime::mcp_transport::serve_stdio(move || {
            mcp_router::factory_with_pipeline(pipeline)
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let app = if cfg.deprecate_rest {
        crate::infra::http_app::build_app_default(pipeline)
    } else {
        let registry = build_registry(pipeline.clone());
        crate::infra::http_app::build_app_with_rest(pipeline, registry)
    };

    let addr = cfg.addr();
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

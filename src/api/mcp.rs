//! Deprecated JSON-RPC-over-HTTP shim backed by the explicit tool registry.
//! The MCP transports at `/mcp` and stdio are the supported surface.

use axum::Json;
use serde_json::{json, Value as J};

use crate::core::error::GatewayError;
use crate::core::mcp::{RpcReq, RpcResp, ServerInfo};
use crate::infra::http::json as http_json;
use crate::tools::registry::Registry;

fn tools_list(reg: &Registry) -> J {
    let tools: Vec<J> = reg
        .0
        .values()
        .map(|t| {
            json!({
                "name": t.name(),
                "description": t.description(),
                "inputSchema": t.input_schema()
            })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &Registry, params: &J) -> Result<J, GatewayError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| GatewayError::Message("missing tool name".into()))?;
    let tool = reg
        .0
        .get(name)
        .ok_or_else(|| GatewayError::Message(format!("unknown tool: {name}")))?;
    let args = params.get("arguments").unwrap_or(&J::Null);
    tool.call(args)
        .await
        .map_err(|e| GatewayError::Message(e.to_string()))
}

// HTTP handler. Takes the raw body so malformed JSON gets an in-band
// -32700 instead of the extractor's plain 400.
pub async fn http(
    axum::extract::State(reg): axum::extract::State<Registry>,
    body: String,
) -> Json<RpcResp> {
    let req: RpcReq = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => return http_json::parse_error(format!("parse error: {e}")),
    };
    tracing::debug!(method = %req.method, id = ?req.id, "REST shim invoked");
    let id = req.id.clone();
    match req.method.as_str() {
        "initialize" => http_json::ok(
            id,
            json!({
                "serverInfo": ServerInfo {
                    name: "summary-mcp-gateway".into(),
                    version: env!("CARGO_PKG_VERSION").into(),
                },
                "capabilities": {}
            }),
        ),
        "shutdown" => http_json::ok(id, J::Null),
        "tools.list" | "tools/list" => http_json::ok(id, tools_list(&reg)),
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => http_json::ok(id, out),
            Err(e) => {
                tracing::warn!(error = %e, "tools.call failed");
                http_json::from_gateway_error(id, e)
            }
        },
        _ => http_json::error(id, -32601, format!("unknown method: {}", req.method)),
    }
}

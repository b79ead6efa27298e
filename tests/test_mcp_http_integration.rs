use std::sync::Arc;

use axum::{routing::any_service, Router};
use http_body_util::BodyExt; // for .collect
use hyper::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};
use tower::ServiceExt; // for .oneshot

use summary_mcp_gateway::clients::openai::OpenAiBackend;
use summary_mcp_gateway::infra::runtime::mcp_transport;
use summary_mcp_gateway::pipeline::fetch::Fetcher;
use summary_mcp_gateway::pipeline::SummaryPipeline;
use summary_mcp_gateway::tools::mcp_router;

static MCP_PROTOCOL_VERSION: &str = "0.5";

/// Drive a full MCP session over the streamable HTTP transport: initialize,
/// notifications/initialized, tools/list, then tools/call for both tools,
/// with the page and the chat-completions endpoint mocked.
#[tokio::test]
async fn initialize_list_and_call_over_streamable_http() {
    let page_server = httpmock::MockServer::start();
    page_server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/article");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body><article><p>Plenty of visible article text to summarize.</p></article></body></html>");
    });

    let llm_server = httpmock::MockServer::start();
    llm_server.mock(|when, then| {
        when.method(httpmock::Method::POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Mocked summary." } }
            ]
        }));
    });

    let factory = {
        let base = llm_server.base_url();
        move || {
            let backend = OpenAiBackend::new(base.clone(), "sk-test", "gpt-4o");
            let pipeline = Arc::new(SummaryPipeline::new(Fetcher::new(), Arc::new(backend)));
            mcp_router::factory_with_pipeline(pipeline)
        }
    };

    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let app = mcp_transport::make_streamable_http_service(factory, session_mgr);
    let app = Router::new().route_service("/mcp", any_service(app));

    let session_id = open_session(&app).await;

    // tools/list
    let list = json!({"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}});
    let list_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id.clone())
        .body(axum::body::Body::from(list.to_string()))
        .unwrap();
    let list_res = timeout(Duration::from_secs(20), app.clone().oneshot(list_req))
        .await
        .unwrap()
        .unwrap();
    assert!(list_res.status().is_success());

    // tools/call add_numbers
    let call = json!({
        "jsonrpc":"2.0","id":3,"method":"tools/call",
        "params": {"name":"add_numbers","arguments":{"x":2,"y":3}}
    });
    let v = rpc_call(&app, &session_id, call).await;
    assert_eq!(v["result"]["structuredContent"]["result"], 5.0);

    // tools/call summarize_url
    let call = json!({
        "jsonrpc":"2.0","id":4,"method":"tools/call",
        "params": {
            "name":"summarize_url",
            "arguments":{"url": format!("{}/article", page_server.base_url()), "words": 50}
        }
    });
    let v = rpc_call(&app, &session_id, call).await;
    let content = &v["result"]["structuredContent"];
    assert_eq!(content["ok"], true, "payload: {content}");
    assert_eq!(content["summary"], "Mocked summary.");
}

/// Initialize a session and ack it, returning the session id.
async fn open_session(app: &Router) -> String {
    let init = json!({
        "jsonrpc":"2.0","id":1,"method":"initialize",
        "params":{ "protocolVersion":"2025-03-26","capabilities":{},"clientInfo":{"name":"test","version":"0.1"} }
    });
    let init_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Protocol-Version", MCP_PROTOCOL_VERSION)
        .body(axum::body::Body::from(init.to_string()))
        .unwrap();
    let init_res = app.clone().oneshot(init_req).await.unwrap();
    assert!(init_res.status().is_success());
    let session_id = init_res
        .headers()
        .get("MCP-Session-Id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    let initialized_notif =
        json!({"jsonrpc":"2.0","method":"notifications/initialized","params":{}});
    let initialized_req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id.clone())
        .body(axum::body::Body::from(initialized_notif.to_string()))
        .unwrap();
    let initialized_res = app.clone().oneshot(initialized_req).await.unwrap();
    assert_eq!(initialized_res.status(), StatusCode::ACCEPTED);

    session_id
}

async fn rpc_call(app: &Router, session_id: &str, body: Value) -> Value {
    let req = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::ACCEPT, "application/json, text/event-stream")
        .header(header::CONTENT_TYPE, "application/json")
        .header("MCP-Session-Id", session_id.to_owned())
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert!(res.status().is_success());
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let s = String::from_utf8_lossy(&bytes);
    s.lines()
        .find_map(|line| line.strip_prefix("data: ").map(|d| d.to_string()))
        .and_then(|d| serde_json::from_str::<Value>(&d).ok())
        .expect("did not find an rpc response for tools/call")
}

/// The backend is fixed when the app is built; environment changes after
/// boot must not leak into later sessions on the same app.
#[tokio::test]
async fn env_changes_after_boot_do_not_reach_new_sessions() {
    let page_server = httpmock::MockServer::start();
    page_server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/doc");
        then.status(200)
            .body("<html><body><p>Some visible page text.</p></body></html>");
    });

    let llm_server = httpmock::MockServer::start();
    let llm_mock = llm_server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "choices": [ { "message": { "role": "assistant", "content": "Should never appear." } } ]
        }));
    });

    // Boot-time wiring with no credential configured.
    let pipeline = Arc::new(SummaryPipeline::new(
        Fetcher::new(),
        Arc::new(summary_mcp_gateway::clients::openai::UnconfiguredBackend),
    ));
    let app = summary_mcp_gateway::infra::http_app::build_app_default(pipeline);

    let call = |id: u64| {
        json!({
            "jsonrpc":"2.0","id":id,"method":"tools/call",
            "params": {
                "name":"summarize_url",
                "arguments":{"url": format!("{}/doc", page_server.base_url())}
            }
        })
    };

    let session_a = open_session(&app).await;
    let v = rpc_call(&app, &session_a, call(2)).await;
    let content = &v["result"]["structuredContent"];
    assert_eq!(content["ok"], false);
    assert!(content["error"]
        .as_str()
        .unwrap()
        .contains("OPENAI_API_KEY not configured"));

    // Mutate the environment after boot, then open a fresh session.
    std::env::set_var("OPENAI_API_KEY", "sk-post-boot");
    std::env::set_var("OPENAI_BASE_URL", llm_server.base_url());

    let session_b = open_session(&app).await;
    let v = rpc_call(&app, &session_b, call(3)).await;
    let content = &v["result"]["structuredContent"];
    assert_eq!(content["ok"], false, "post-boot env leaked: {content}");
    assert!(content["error"]
        .as_str()
        .unwrap()
        .contains("OPENAI_API_KEY not configured"));
    llm_mock.assert_hits(0);

    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("OPENAI_BASE_URL");
}

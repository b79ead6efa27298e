//! summary-mcp-gateway: MCP tools for URL summarization.
//!
//! Exposes `add_numbers` and `summarize_url` over Streamable HTTP (`/mcp`)
//! and stdio, plus a deprecated JSON-RPC REST shim backed by an explicit
//! tool registry.

pub mod api;
pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod pipeline;
pub mod tools;

//! Core types: domain-agnostic error model and JSON-RPC protocol surface.

pub mod error;
pub mod mcp;

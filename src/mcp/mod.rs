//! Model Context Protocol (MCP) surface.
//!
//! This module exposes the TickTick pipeline as MCP tools over the
//! Streamable HTTP transport.
//!
//! - **server**: the tool handlers; every tool returns plain text, with
//!   failures converted to text on the same path (the calling agent never
//!   sees a protocol-level error from these tools)
//! - **service**: wraps the server in a `StreamableHttpService` that can
//!   be nested into an Axum router
//!
//! The server is generic over `C: TickTickApi` so the whole surface runs
//! against a stub client in tests (no dynamic dispatch).

pub mod server;
mod service;

#[cfg(test)]
mod service_test;

pub use server::McpServer;
pub use service::create_mcp_service;

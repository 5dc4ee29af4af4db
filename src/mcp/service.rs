//! MCP Streamable HTTP service creation.
//!
//! Wraps the tool server in a `StreamableHttpService` that can be nested
//! into an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::ticktick::{SessionManager, TickTickApi};

use super::server::McpServer;

/// Create the MCP Streamable HTTP service.
///
/// The service constructs a fresh `McpServer` per MCP session; all of
/// them share one `SessionManager`, so the upstream session is still
/// created at most once per process.
pub fn create_mcp_service<C: TickTickApi + 'static>(
    sessions: Arc<SessionManager<C>>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<C>, LocalSessionManager> {
    // Note: the factory returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<C>, std::io::Error> {
        Ok(McpServer::new(Arc::clone(&sessions)))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.sse_keep_alive = None; // Use default (15s)
    config.sse_retry = None; // Use default retry behavior
    config.stateful_mode = true; // Enable session management
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

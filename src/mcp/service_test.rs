//! Tests for MCP service creation

use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::mcp::create_mcp_service;
use crate::ticktick::SessionManager;
use crate::ticktick::testing::{StaticIdentity, StubApi};

/// The service must be constructible around a shared session manager;
/// transport behavior itself belongs to rmcp.
#[tokio::test]
async fn test_create_service() {
    let sessions = Arc::new(SessionManager::new(
        Arc::new(StaticIdentity("test-token")),
        Box::new(|_token| Ok(StubApi::new(json!([])))),
    ));

    let _service = create_mcp_service(sessions, CancellationToken::new());
}

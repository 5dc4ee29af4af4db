//! Canned-payload `TickTickApi` stub for unit tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::client::{ClientError, TickTickApi};
use crate::auth::{Identity, IdentityProvider};

/// Identity provider handing out a fixed access token.
pub struct StaticIdentity(pub &'static str);

impl IdentityProvider for StaticIdentity {
    fn current_identity(&self) -> Option<Identity> {
        Some(Identity {
            access_token: self.0.to_string(),
        })
    }
}

/// Stub upstream client returning fixed payloads.
///
/// `projects` is returned verbatim from `get_projects`; per-project task
/// payloads come from `tasks`, defaulting to an empty array. With
/// `fail_transport` set, every call returns a transport error instead.
#[derive(Clone, Debug)]
pub struct StubApi {
    projects: Value,
    tasks: HashMap<String, Value>,
    fail_transport: bool,
}

impl StubApi {
    pub fn new(projects: Value) -> Self {
        Self {
            projects,
            tasks: HashMap::new(),
            fail_transport: false,
        }
    }

    pub fn with_tasks(mut self, project_id: &str, payload: Value) -> Self {
        self.tasks.insert(project_id.to_string(), payload);
        self
    }

    pub fn failing() -> Self {
        Self {
            projects: json!([]),
            tasks: HashMap::new(),
            fail_transport: true,
        }
    }

    fn transport_error() -> ClientError {
        ClientError::InvalidResponse {
            message: "connection reset by peer".to_string(),
        }
    }
}

#[async_trait]
impl TickTickApi for StubApi {
    async fn get_projects(&self) -> Result<Value, ClientError> {
        if self.fail_transport {
            return Err(Self::transport_error());
        }
        Ok(self.projects.clone())
    }

    async fn get_project_tasks(&self, project_id: &str) -> Result<Value, ClientError> {
        if self.fail_transport {
            return Err(Self::transport_error());
        }
        Ok(self
            .tasks
            .get(project_id)
            .cloned()
            .unwrap_or_else(|| json!([])))
    }
}

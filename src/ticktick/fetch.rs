//! Payload normalization between the raw API client and the tool surface.
//!
//! Every operation yields either fully-typed records or a `FetchError`;
//! there is no partial success. Upstream application errors (an `error`
//! key inside a 200 body) and transport faults are kept distinct because
//! the tool surface words them differently.

use std::sync::Arc;

use miette::Diagnostic;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::client::{ClientError, TickTickApi};
use super::model::{Project, Task};

#[derive(Error, Diagnostic, Debug)]
pub enum FetchError {
    /// The API reported a failure inside an otherwise successful response.
    /// Displays as the upstream message alone; callers add context.
    #[error("{message}")]
    #[diagnostic(code(ticktick_mcp::fetch::upstream))]
    Upstream { message: String },

    /// Network fault or a payload that does not match the expected shape.
    #[error("{message}")]
    #[diagnostic(code(ticktick_mcp::fetch::transport))]
    Transport { message: String },
}

impl FetchError {
    pub fn is_upstream(&self) -> bool {
        matches!(self, FetchError::Upstream { .. })
    }
}

impl From<ClientError> for FetchError {
    fn from(e: ClientError) -> Self {
        FetchError::Transport {
            message: e.to_string(),
        }
    }
}

/// Typed retrieval over any `TickTickApi` implementation.
pub struct TaskFetcher<C> {
    client: Arc<C>,
}

impl<C: TickTickApi> TaskFetcher<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// All projects in the account.
    pub async fn projects(&self) -> Result<Vec<Project>, FetchError> {
        decode(self.client.get_projects().await?)
    }

    /// Tasks of one project.
    pub async fn project_tasks(&self, project_id: &str) -> Result<Vec<Task>, FetchError> {
        decode(self.client.get_project_tasks(project_id).await?)
    }

    /// Tasks across every open project, in project order.
    ///
    /// Closed projects are skipped silently; their tasks are not
    /// reachable through this operation. Any single project failing fails
    /// the whole aggregation.
    pub async fn all_tasks(&self) -> Result<Vec<Task>, FetchError> {
        let projects = self.projects().await?;

        let mut tasks = Vec::new();
        for project in projects.iter().filter(|p| !p.is_closed()) {
            tasks.extend(self.project_tasks(&project.id).await?);
        }
        Ok(tasks)
    }
}

/// Split a raw payload into typed records or the upstream error message.
fn decode<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, FetchError> {
    if let Some(error) = payload.get("error") {
        let message = match error.as_str() {
            Some(text) => text.to_string(),
            None => error.to_string(),
        };
        return Err(FetchError::Upstream { message });
    }

    serde_json::from_value(payload).map_err(|e| FetchError::Transport {
        message: e.to_string(),
    })
}

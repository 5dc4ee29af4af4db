//! MCP tool handlers for TickTick.
//!
//! Every tool runs the session/fetch/filter/render pipeline and resolves
//! to a plain text result on success and failure alike. The failure texts
//! are part of the agent-facing contract and are matched by the tests;
//! keep them stable.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::ticktick::{SessionManager, Task, TaskFetcher, TaskFilter, TickTickApi, render};

const INIT_FAILED: &str =
    "Failed to initialize TickTick client. Please check your AUTH_TOKEN environment variable.";

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectTasksParams {
    #[schemars(description = "The ID of the project to get tasks from")]
    pub project_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchTasksParams {
    #[schemars(description = "The term to search for in task titles, content, and subtask titles")]
    pub search_term: String,
}

// =============================================================================
// Server
// =============================================================================

/// The MCP tool surface over the TickTick pipeline.
///
/// Generic over `C: TickTickApi` for zero-cost abstraction; the session
/// manager is shared between per-connection server instances so the
/// upstream session is created once per process.
pub struct McpServer<C: TickTickApi> {
    sessions: Arc<SessionManager<C>>,
    tool_router: ToolRouter<Self>,
}

impl<C: TickTickApi> Clone for McpServer<C> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            tool_router: self.tool_router.clone(),
        }
    }
}

fn reply(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn render_task_list(mut header: String, tasks: &[Task]) -> String {
    for (i, task) in tasks.iter().enumerate() {
        header.push_str(&format!("Task {}:\n{}\n", i + 1, render::format_task(task)));
    }
    header
}

#[tool_router]
impl<C: TickTickApi + 'static> McpServer<C> {
    pub fn new(sessions: Arc<SessionManager<C>>) -> Self {
        Self {
            sessions,
            tool_router: Self::tool_router(),
        }
    }

    /// Get-or-create the upstream session, mapping failure to the uniform
    /// initialization text.
    async fn fetcher(&self) -> Result<TaskFetcher<C>, CallToolResult> {
        match self.sessions.get_or_create().await {
            Ok(client) => Ok(TaskFetcher::new(client)),
            Err(e) => {
                tracing::error!("session initialization failed: {e}");
                Err(reply(INIT_FAILED))
            }
        }
    }

    #[tool(description = "Get all projects from TickTick.")]
    pub async fn get_projects(&self) -> Result<CallToolResult, McpError> {
        let fetcher = match self.fetcher().await {
            Ok(fetcher) => fetcher,
            Err(failure) => return Ok(failure),
        };

        let projects = match fetcher.projects().await {
            Ok(projects) => projects,
            Err(e) if e.is_upstream() => {
                return Ok(reply(format!("Error fetching projects: {e}")));
            }
            Err(e) => return Ok(reply(format!("Error getting projects: {e}"))),
        };

        if projects.is_empty() {
            return Ok(reply("No projects found."));
        }

        let mut out = format!("Found {} projects:\n\n", projects.len());
        for (i, project) in projects.iter().enumerate() {
            out.push_str(&format!(
                "Project {}:\n{}\n",
                i + 1,
                render::format_project(project)
            ));
        }
        Ok(reply(out))
    }

    #[tool(description = "Get all tasks in a specific project.")]
    pub async fn get_project_tasks(
        &self,
        params: Parameters<GetProjectTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let project_id = params.0.project_id;

        let fetcher = match self.fetcher().await {
            Ok(fetcher) => fetcher,
            Err(failure) => return Ok(failure),
        };

        let tasks = match fetcher.project_tasks(&project_id).await {
            Ok(tasks) => tasks,
            Err(e) if e.is_upstream() => {
                return Ok(reply(format!("Error fetching tasks: {e}")));
            }
            Err(e) => return Ok(reply(format!("Error getting project tasks: {e}"))),
        };

        if tasks.is_empty() {
            return Ok(reply(format!("No tasks found in project {project_id}.")));
        }

        let header = format!(
            "Found {} tasks in project {}:\n\n",
            tasks.len(),
            project_id
        );
        Ok(reply(render_task_list(header, &tasks)))
    }

    #[tool(description = "Get all tasks from TickTick. Ignores closed projects.")]
    pub async fn get_all_tasks(&self) -> Result<CallToolResult, McpError> {
        let fetcher = match self.fetcher().await {
            Ok(fetcher) => fetcher,
            Err(failure) => return Ok(failure),
        };

        let tasks = match fetcher.all_tasks().await {
            Ok(tasks) => tasks,
            Err(e) if e.is_upstream() => {
                return Ok(reply(format!("Error fetching tasks: {e}")));
            }
            Err(e) => return Ok(reply(format!("Error getting all tasks: {e}"))),
        };

        if tasks.is_empty() {
            return Ok(reply("No tasks found."));
        }

        let header = format!("Found {} tasks:\n\n", tasks.len());
        Ok(reply(render_task_list(header, &tasks)))
    }

    #[tool(description = "Search for tasks in TickTick by title, content, or subtask titles.")]
    pub async fn search_tasks(
        &self,
        params: Parameters<SearchTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let term = params.0.search_term;

        let fetcher = match self.fetcher().await {
            Ok(fetcher) => fetcher,
            Err(failure) => return Ok(failure),
        };

        let tasks = match fetcher.all_tasks().await {
            Ok(tasks) => tasks,
            Err(e) if e.is_upstream() => {
                return Ok(reply(format!("Error fetching tasks: {e}")));
            }
            Err(e) => return Ok(reply(format!("Error searching tasks: {e}"))),
        };

        let matching = TaskFilter::search(&term).apply(tasks);
        if matching.is_empty() {
            return Ok(reply(format!("No tasks found matching '{term}'.")));
        }

        let header = format!("Found {} tasks matching '{}':\n\n", matching.len(), term);
        Ok(reply(render_task_list(header, &matching)))
    }

    #[tool(description = "Get all tasks from TickTick that are due today.")]
    pub async fn get_tasks_due_today(&self) -> Result<CallToolResult, McpError> {
        let fetcher = match self.fetcher().await {
            Ok(fetcher) => fetcher,
            Err(failure) => return Ok(failure),
        };

        let tasks = match fetcher.all_tasks().await {
            Ok(tasks) => tasks,
            Err(e) if e.is_upstream() => {
                return Ok(reply(format!("Error fetching tasks: {e}")));
            }
            Err(e) => return Ok(reply(format!("Error getting tasks due today: {e}"))),
        };

        let due_today = TaskFilter::due_today().apply(tasks);
        if due_today.is_empty() {
            return Ok(reply("No tasks are due today."));
        }

        let header = format!("Found {} tasks due today:\n\n", due_today.len());
        Ok(reply(render_task_list(header, &due_today)))
    }

    #[tool(description = "Test the TickTick API connection")]
    pub async fn test_ticktick_connection(&self) -> Result<CallToolResult, McpError> {
        let fetcher = match self.sessions.get_or_create().await {
            Ok(client) => TaskFetcher::new(client),
            Err(e) => {
                tracing::error!("session initialization failed: {e}");
                return Ok(reply(format!("❌ {INIT_FAILED}")));
            }
        };

        match fetcher.projects().await {
            Ok(projects) => Ok(reply(format!(
                "✅ TickTick connection successful! Found {} projects.",
                projects.len()
            ))),
            Err(e) if e.is_upstream() => Ok(reply(format!("❌ TickTick API error: {e}"))),
            Err(e) => Ok(reply(format!("❌ TickTick connection failed: {e}"))),
        }
    }

    #[tool(description = "Ping the server to check if it's responsive")]
    pub async fn ping(&self) -> Result<CallToolResult, McpError> {
        Ok(reply("pong"))
    }
}

#[tool_handler]
impl<C: TickTickApi + 'static> ServerHandler for McpServer<C> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions(
                "TickTick MCP Server - Browse projects, fetch and search tasks, and check due dates",
            )
    }
}

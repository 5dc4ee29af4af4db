//! TickTick upstream integration.
//!
//! Everything between the MCP tool surface and the TickTick open API:
//!
//! - `model`: task/project records as they arrive on the wire
//! - `client`: the `TickTickApi` trait and its reqwest implementation
//! - `session`: lazy, process-wide session bound to one access token
//! - `fetch`: payload normalization and upstream-error detection
//! - `query`: search and due-date filter strategies
//! - `render`: deterministic text rendering for agent consumption
//!
//! The tool surface depends on `TickTickApi` rather than the concrete
//! client, so everything above `client` is exercised against a stub in
//! tests (no dynamic dispatch).

pub mod client;
pub mod fetch;
pub mod model;
pub mod query;
pub mod render;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod render_test;

pub use client::{ClientError, TickTickApi, TickTickClient};
pub use fetch::{FetchError, TaskFetcher};
pub use model::{ChecklistItem, Project, Task};
pub use query::TaskFilter;
pub use session::{SessionError, SessionManager};

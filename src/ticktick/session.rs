//! Lazy, process-wide upstream session.
//!
//! The first tool call that needs the API resolves a credential and
//! constructs a client; every later call reuses it. Token rotation
//! mid-process is unsupported: the session, once created, lives until the
//! process exits.

use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::auth::{self, IdentityProvider};

use super::client::ClientError;

#[derive(Error, Diagnostic, Debug)]
pub enum SessionError {
    #[error("No TickTick access token available")]
    #[diagnostic(
        code(ticktick_mcp::session::no_credential),
        help(
            "Set TICKTICK_AUTH_TOKEN (or AUTH_TOKEN) in the environment, or connect through an authenticated transport."
        )
    )]
    NoCredential,

    #[error("Failed to initialize TickTick client: {message}")]
    #[diagnostic(code(ticktick_mcp::session::init))]
    Init { message: String },
}

/// Builds a client from a resolved access token.
pub type ConnectFn<C> = Box<dyn Fn(String) -> Result<C, ClientError> + Send + Sync>;

/// Owns the single upstream session for this process.
///
/// Generic over the client type so the tool surface can be exercised with
/// a stub. The identity provider and connect function are injected; the
/// manager itself holds no credential state outside the cached session.
pub struct SessionManager<C> {
    identity: Arc<dyn IdentityProvider>,
    connect: ConnectFn<C>,
    session: OnceCell<Arc<C>>,
}

impl<C> SessionManager<C> {
    pub fn new(identity: Arc<dyn IdentityProvider>, connect: ConnectFn<C>) -> Self {
        Self {
            identity,
            connect,
            session: OnceCell::new(),
        }
    }

    /// Return the cached session, creating it on first use.
    ///
    /// Concurrent first calls are serialized; exactly one client is
    /// constructed per process. A failed attempt leaves the cell empty, so
    /// a later call (with, say, the environment fixed) can succeed.
    pub async fn get_or_create(&self) -> Result<Arc<C>, SessionError> {
        self.session
            .get_or_try_init(|| async {
                let token = auth::resolve_token(self.identity.as_ref())
                    .ok_or(SessionError::NoCredential)?;
                let client = (self.connect)(token).map_err(|e| SessionError::Init {
                    message: e.to_string(),
                })?;
                Ok(Arc::new(client))
            })
            .await
            .cloned()
    }
}

impl SessionManager<super::TickTickClient> {
    /// Manager over the real API client with the given identity source.
    pub fn http(identity: Arc<dyn IdentityProvider>) -> Self {
        Self::new(
            identity,
            Box::new(|token| super::TickTickClient::new(&token)),
        )
    }

    /// Manager for env-only deployments (no authenticated transport).
    pub fn from_env() -> Self {
        Self::http(Arc::new(crate::auth::NoIdentity))
    }
}

//! Access-token resolution.
//!
//! The server can run behind an authenticated MCP transport (where the
//! hosting layer attaches a per-connection identity) or standalone with a
//! token taken from the environment. Resolution is a pure lookup: no
//! network calls, no caching, no validation of the token format.

use std::env;

#[cfg(test)]
mod mod_test;

/// Primary environment variable holding a TickTick access token.
pub const TOKEN_ENV: &str = "TICKTICK_AUTH_TOKEN";

/// Fallback environment variable, kept for older deployments.
pub const TOKEN_ENV_FALLBACK: &str = "AUTH_TOKEN";

/// An authenticated identity attached by the hosting transport layer.
#[derive(Debug, Clone)]
pub struct Identity {
    pub access_token: String,
}

/// Capability for looking up the identity of the current connection.
///
/// The OAuth exchange itself happens outside this crate; whatever layer
/// performs it supplies an implementation of this trait.
pub trait IdentityProvider: Send + Sync {
    fn current_identity(&self) -> Option<Identity>;
}

/// Provider for deployments without an authenticated transport.
///
/// Always reports no identity, so resolution falls through to the
/// environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdentity;

impl IdentityProvider for NoIdentity {
    fn current_identity(&self) -> Option<Identity> {
        None
    }
}

/// Resolve an access token, first from the identity context, then from
/// `TICKTICK_AUTH_TOKEN`, then from `AUTH_TOKEN`.
///
/// Returns `None` when no source yields a token. Empty-string environment
/// values count as absent. Callers must treat `None` as "authentication
/// unavailable" rather than a retryable error.
pub fn resolve_token(identity: &dyn IdentityProvider) -> Option<String> {
    if let Some(identity) = identity.current_identity() {
        return Some(identity.access_token);
    }

    env_token(TOKEN_ENV).or_else(|| env_token(TOKEN_ENV_FALLBACK))
}

fn env_token(name: &str) -> Option<String> {
    env::var(name).ok().filter(|token| !token.is_empty())
}

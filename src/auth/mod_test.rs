//! Tests for access-token resolution

use serial_test::serial;

use crate::auth::{self, Identity, IdentityProvider, NoIdentity, TOKEN_ENV, TOKEN_ENV_FALLBACK};

struct StaticIdentity(&'static str);

impl IdentityProvider for StaticIdentity {
    fn current_identity(&self) -> Option<Identity> {
        Some(Identity {
            access_token: self.0.to_string(),
        })
    }
}

fn clear_env() {
    unsafe {
        std::env::remove_var(TOKEN_ENV);
        std::env::remove_var(TOKEN_ENV_FALLBACK);
    }
}

#[test]
#[serial]
fn test_identity_wins_over_environment() {
    unsafe {
        std::env::set_var(TOKEN_ENV, "env-token");
    }

    let token = auth::resolve_token(&StaticIdentity("identity-token"));

    clear_env();
    assert_eq!(token.as_deref(), Some("identity-token"));
}

#[test]
#[serial]
fn test_primary_env_var_preferred() {
    unsafe {
        std::env::set_var(TOKEN_ENV, "primary-token");
        std::env::set_var(TOKEN_ENV_FALLBACK, "fallback-token");
    }

    let token = auth::resolve_token(&NoIdentity);

    clear_env();
    assert_eq!(token.as_deref(), Some("primary-token"));
}

#[test]
#[serial]
fn test_fallback_env_var_used_when_primary_missing() {
    clear_env();
    unsafe {
        std::env::set_var(TOKEN_ENV_FALLBACK, "fallback-token");
    }

    let token = auth::resolve_token(&NoIdentity);

    clear_env();
    assert_eq!(token.as_deref(), Some("fallback-token"));
}

#[test]
#[serial]
fn test_empty_env_var_counts_as_absent() {
    clear_env();
    unsafe {
        std::env::set_var(TOKEN_ENV, "");
        std::env::set_var(TOKEN_ENV_FALLBACK, "fallback-token");
    }

    let token = auth::resolve_token(&NoIdentity);

    clear_env();
    assert_eq!(token.as_deref(), Some("fallback-token"));
}

#[test]
#[serial]
fn test_no_source_resolves_to_none() {
    clear_env();

    let token = auth::resolve_token(&NoIdentity);

    assert!(token.is_none(), "no identity and no env should yield None");
}

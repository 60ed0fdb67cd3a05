//! Access-token consumption contract
//!
//! Token acquisition and refresh are owned outside this crate. The trait
//! here is the consumption side only: something that can hand over the
//! current token. Operations still take the token as an explicit argument;
//! the trait exists for embedders that want dependency injection at the
//! call site.

use async_trait::async_trait;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the current access token, if one is held.
    async fn access_token(&self) -> Option<String>;

    /// Refresh token for out-of-band renewal.
    ///
    /// Never consumed by this crate; passed through for collaborators that
    /// own the token lifecycle.
    async fn refresh_token(&self) -> Option<String> {
        None
    }
}

/// Fixed-token provider for tests and simple embedders.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: Some(access_token.into()), refresh_token: None }
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Option<String> {
        self.access_token.clone()
    }

    async fn refresh_token(&self) -> Option<String> {
        self.refresh_token.clone()
    }
}

/// A token is usable only when present and non-blank. Whitespace-only
/// tokens are treated as absent everywhere.
pub(crate) fn usable_token(token: Option<&str>) -> Option<&str> {
    match token {
        Some(t) if !t.trim().is_empty() => Some(t),
        _ => None,
    }
}

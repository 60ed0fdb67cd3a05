//! Tenant base-URL resolution
//!
//! Each tenant (school district) may point at its own backend deployment.
//! Resolution is pure: an explicit tenant domain wins, otherwise the
//! process-wide default applies, and a single trailing slash is stripped so
//! path concatenation stays predictable.

use classbridge_domain::constants::DEFAULT_API_BASE_URL;

/// Resolve the base URL for one request.
///
/// Blank tenant domains are treated as absent. The result never ends with a
/// trailing slash.
pub fn resolve_base_url(tenant_domain: Option<&str>, default_base_url: &str) -> String {
    let chosen = match tenant_domain {
        Some(domain) if !domain.trim().is_empty() => domain,
        _ => default_base_url,
    };
    chosen.strip_suffix('/').unwrap_or(chosen).to_owned()
}

/// Trait for supplying tenant context
///
/// Mirrors [`crate::api::AccessTokenProvider`]: the tenant lifecycle
/// (selection, switching) is owned by the embedder, this is the consumption
/// side.
pub trait TenantResolver: Send + Sync {
    /// Tenant-specific domain, if the embedder is scoped to one.
    fn tenant_domain(&self) -> Option<String>;

    /// Fallback backend URL used when no tenant is selected.
    fn default_base_url(&self) -> String {
        DEFAULT_API_BASE_URL.to_owned()
    }
}

/// Fixed tenant context for tests and simple embedders.
#[derive(Debug, Clone)]
pub struct StaticTenant {
    domain: Option<String>,
    default_base_url: String,
}

impl StaticTenant {
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: Some(domain.into()), default_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }

    /// Context with no tenant selected; everything resolves to the default.
    pub fn unselected() -> Self {
        Self { domain: None, default_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }

    pub fn with_default_base_url(mut self, url: impl Into<String>) -> Self {
        self.default_base_url = url.into();
        self
    }
}

impl TenantResolver for StaticTenant {
    fn tenant_domain(&self) -> Option<String> {
        self.domain.clone()
    }

    fn default_base_url(&self) -> String {
        self.default_base_url.clone()
    }
}

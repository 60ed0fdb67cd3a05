//! Platform API client
//!
//! HTTP client for the ClassBridge REST API.
//!
//! # Architecture
//!
//! - Uses the crate's `HttpClient` transport (no direct reqwest)
//! - Bearer-token authorization; token lifecycle owned by the embedder
//! - Per-call tenant base-URL resolution, no cross-call state
//! - One generic `request` primitive, typed per-resource wrappers on top
//! - No implicit retries; callers own retry and timeout policy

pub mod auth;
pub mod client;
pub mod errors;
pub mod resources;
pub mod tenant;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, RequestDescriptor};
pub use errors::{ApiError, ApiErrorCategory, NO_TOKEN_CODE};
pub use resources::{ClassBridgeApi, ResourceClient};
pub use tenant::{resolve_base_url, StaticTenant, TenantResolver};

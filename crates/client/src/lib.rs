//! # ClassBridge Client
//!
//! Tenant-aware REST client for the ClassBridge platform API.
//!
//! This crate contains:
//! - HTTP transport wrapper over reqwest
//! - The tenant-aware API client (base URL resolution, bearer auth,
//!   response normalization, error taxonomy)
//! - Typed CRUD wrappers for platform resources
//! - Environment-based configuration loading
//!
//! ## Architecture
//! - Depends on `classbridge-domain` for wire types
//! - Contains all "impure" code (network I/O, environment access)
//! - Tenant and token context is passed explicitly per call; the crate
//!   holds no mutable state between calls

pub mod api;
pub mod case;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, ApiClient, ApiClientBuilder, ApiClientConfig, ApiError, ApiErrorCategory,
    ClassBridgeApi, RequestDescriptor, ResourceClient, StaticTenant, StaticTokenProvider,
    TenantResolver,
};
pub use case::to_snake_case;
pub use http::{HttpClient, HttpClientBuilder};

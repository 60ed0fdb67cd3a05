//! Application constants
//!
//! Centralized location for the domain-level constants shared by the client
//! crates.

// Backend defaults
pub const DEFAULT_API_BASE_URL: &str = "https://api.classbridge.io/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("classbridge-client/", env!("CARGO_PKG_VERSION"));

// Resource collection paths (versioned, trailing slash per backend routing)
pub const SCOPE_SEQUENCES_PATH: &str = "/plans/scope-sequences/";
pub const UNIT_PLANS_PATH: &str = "/plans/unit-plans/";
pub const LESSON_PLANS_PATH: &str = "/plans/lesson-plans/";
pub const ASSIGNMENTS_PATH: &str = "/assignments/";

// Environment variable names understood by the config loader
pub const ENV_API_BASE_URL: &str = "CLASSBRIDGE_API_BASE_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "CLASSBRIDGE_API_TIMEOUT_SECS";
pub const ENV_API_USER_AGENT: &str = "CLASSBRIDGE_API_USER_AGENT";

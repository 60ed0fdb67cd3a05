//! # ClassBridge Domain
//!
//! Wire-level data types for the ClassBridge platform API.
//!
//! This crate contains:
//! - Resource models as they appear on the wire (curriculum plans, assignments)
//! - The paginated `Page<T>` envelope returned by list endpoints
//! - Domain constants (default backend URL, resource paths)
//!
//! ## Architecture
//! - No dependencies on other ClassBridge crates
//! - Pure data structures, no I/O

pub mod constants;
pub mod types;

// Re-export commonly used items
pub use types::*;

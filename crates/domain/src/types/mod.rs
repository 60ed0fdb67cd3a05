//! Domain types and models
//!
//! Wire-format models for the ClassBridge REST API. Field names match the
//! backend's snake_case JSON exactly, so read responses deserialize without
//! any rename maps (the client converts key case on the write path only).

pub mod assignments;
pub mod plans;

use serde::{Deserialize, Serialize};

pub use assignments::Assignment;
pub use plans::{LessonPlan, ScopeAndSequence, UnitPlan};

/// Paginated envelope returned by list endpoints.
///
/// The backend wraps list results as `{ "results": [...], "count": ...,
/// "next": ..., "previous": ... }`. Only `results` is consumed by the client
/// layer; it defaults to an empty vector when the backend omits the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_results_to_empty() {
        let page: Page<UnitPlan> = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert!(page.count.is_none());
    }

    #[test]
    fn page_parses_paging_metadata() {
        let body = serde_json::json!({
            "results": [],
            "count": 42,
            "next": "https://api.classbridge.io/v1/assignments/?page=2",
            "previous": null
        });
        let page: Page<Assignment> = serde_json::from_value(body).unwrap();
        assert_eq!(page.count, Some(42));
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
    }
}

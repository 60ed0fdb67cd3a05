//! Assignment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Graded piece of work attached to a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub max_score: Option<u32>,
    #[serde(default)]
    pub published: bool,
}

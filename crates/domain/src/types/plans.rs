//! Curriculum planning models
//!
//! A scope-and-sequence owns unit plans, which in turn own lesson plans.
//! Optional fields reflect columns the backend may leave null for drafts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Year-level curriculum map for one subject and grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeAndSequence {
    pub id: i64,
    pub title: String,
    pub subject: Option<String>,
    pub grade_level: Option<String>,
    pub academic_year: Option<String>,
    #[serde(default)]
    pub unit_count: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Multi-week teaching unit inside a scope-and-sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitPlan {
    pub id: i64,
    pub scope_and_sequence: Option<i64>,
    pub title: String,
    pub subject: Option<String>,
    pub grade_level: Option<String>,
    pub duration_weeks: Option<u32>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Single-session lesson inside a unit plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonPlan {
    pub id: i64,
    pub unit_plan: Option<i64>,
    pub title: String,
    pub lesson_date: Option<NaiveDate>,
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub materials: Vec<String>,
    pub notes: Option<String>,
}

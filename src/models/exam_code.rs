// src/models/exam_code.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One roll number paired with its sequential exam code.
/// Created once by the assignment engine and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamCodeRecord {
    pub roll_number: String,

    /// Composite label "<stream name>-<subject code>", e.g. "SCIENCE-PHY".
    pub subject: String,

    pub exam_code: String,

    /// Creation time in Unix milliseconds.
    pub id: i64,
}

/// DTO for assigning an exam code.
///
/// Emptiness is checked by the engine against the catalog; the validator only
/// bounds field lengths.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AssignRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "Stream must be at most 64 characters."))]
    pub stream: String,
    #[serde(default)]
    #[validate(length(max = 64, message = "Subject must be at most 64 characters."))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(max = 15, message = "Roll number must be at most 15 characters."))]
    pub roll_number: String,
}

/// Query parameters shared by the list and codesheet endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub stream: Option<String>,
    pub subject: Option<String>,
}

impl FilterParams {
    /// Form selects send empty strings for "nothing selected".
    pub fn stream(&self) -> Option<&str> {
        self.stream.as_deref().filter(|s| !s.is_empty())
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }
}

/// DTO for the exam code listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExamCodeListResponse {
    /// Number of codes generated so far in this session.
    pub total: usize,
    /// Number of records matching the filters.
    pub count: usize,
    pub records: Vec<ExamCodeRecord>,
}

// src/models/mark_foil.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A row of the mark foil. Marks are free text filled in by staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MarkEntry {
    #[validate(length(min = 1, max = 16))]
    pub exam_code: String,
    #[serde(default)]
    #[validate(length(max = 16))]
    pub marks_in_figure: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub marks_in_words: String,
}

impl MarkEntry {
    /// A row with both mark fields still blank.
    pub fn blank(exam_code: impl Into<String>) -> Self {
        Self {
            exam_code: exam_code.into(),
            marks_in_figure: String::new(),
            marks_in_words: String::new(),
        }
    }
}

/// Free-text header fields of the mark foil.
/// Empty fields fall back to placeholder text when printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMetadata {
    #[serde(default)]
    pub confidential_form_no: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub exam_type: String,
    #[serde(default)]
    pub mark_foil_no: String,
}

/// DTO for choosing the subject of a mark foil.
#[derive(Debug, Deserialize, Validate)]
pub struct SelectSubjectRequest {
    #[serde(default)]
    #[validate(length(max = 128))]
    pub subject: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkFoilSelection {
    pub subject: String,
    pub mark_foil_no: String,
    pub entries: Vec<MarkEntry>,
}

/// DTO for downloading a mark foil.
#[derive(Debug, Deserialize, Validate)]
pub struct MarkFoilPdfRequest {
    #[serde(default)]
    #[validate(length(max = 128))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub confidential_form_no: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub semester: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub exam_type: String,
    /// Falls back to the session's mark foil number.
    pub mark_foil_no: Option<String>,
    /// Falls back to blank entries derived from the store.
    pub entries: Option<Vec<MarkEntry>>,
}

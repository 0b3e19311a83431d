// src/services/assignment.rs

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{
        catalog::Catalog,
        exam_code::{AssignRequest, ExamCodeRecord},
    },
    store::RecordStore,
};

/// Exam codes count up from here: the first record gets 18001.
pub const BASE_EXAM_CODE: usize = 18000;

/// Exam code for the record inserted after `existing` records.
pub fn next_exam_code(existing: usize) -> String {
    (BASE_EXAM_CODE + existing + 1).to_string()
}

/// Composite subject label stored on every record, e.g. "SCIENCE-PHY".
pub fn subject_label(stream: &str, subject_code: &str) -> String {
    format!("{}-{}", stream, subject_code)
}

/// Validates stream/subject/roll selections and builds exam code records.
///
/// The engine never touches the store itself; `submit` is the only path that
/// appends, and it does so through `RecordStore::commit`.
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    catalog: Arc<Catalog>,
}

impl AssignmentEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Builds the next record for `roll_number`, stamped with the current time.
    ///
    /// Not idempotent: the same arguments against a grown collection yield a
    /// new, higher exam code.
    pub fn assign(
        &self,
        stream: &str,
        subject: &str,
        roll_number: &str,
        current: &[ExamCodeRecord],
    ) -> Result<ExamCodeRecord, AppError> {
        let now = chrono::Utc::now().timestamp_millis();
        self.assign_at(stream, subject, roll_number, current, now)
    }

    /// Same as `assign` with an explicit creation timestamp.
    pub fn assign_at(
        &self,
        stream: &str,
        subject: &str,
        roll_number: &str,
        current: &[ExamCodeRecord],
        id: i64,
    ) -> Result<ExamCodeRecord, AppError> {
        self.validate(stream, subject, roll_number)?;

        Ok(ExamCodeRecord {
            roll_number: roll_number.to_string(),
            subject: subject_label(stream, subject),
            exam_code: next_exam_code(current.len()),
            id,
        })
    }

    /// Assigns and appends in one step under the store's write lock.
    pub fn submit(
        &self,
        store: &RecordStore,
        req: &AssignRequest,
    ) -> Result<ExamCodeRecord, AppError> {
        let record = store.commit(|current| {
            self.assign(&req.stream, &req.subject, &req.roll_number, current)
        })?;

        tracing::info!(
            roll_number = %record.roll_number,
            subject = %record.subject,
            exam_code = %record.exam_code,
            "Assigned exam code"
        );

        Ok(record)
    }

    fn validate(&self, stream: &str, subject: &str, roll_number: &str) -> Result<(), AppError> {
        if stream.is_empty() || subject.is_empty() || roll_number.is_empty() {
            return Err(AppError::ValidationError(
                "Please select stream, subject and enter roll number".to_string(),
            ));
        }

        let stream_entry = self
            .catalog
            .stream(stream)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown stream '{}'", stream)))?;

        if stream_entry.subject(subject).is_none() {
            return Err(AppError::ValidationError(format!(
                "Subject '{}' does not belong to stream '{}'",
                subject, stream
            )));
        }

        Ok(())
    }
}

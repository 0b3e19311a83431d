// src/store.rs

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{error::AppError, models::exam_code::ExamCodeRecord};

/// Append-only, in-memory collection of assigned exam codes.
///
/// Clones share the same underlying collection. Records live for the lifetime
/// of the process; there is no update or delete.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<RwLock<Vec<ExamCodeRecord>>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: ExamCodeRecord) -> Result<(), AppError> {
        self.write()?.push(record);
        Ok(())
    }

    /// Copy of every record in insertion order.
    pub fn snapshot(&self) -> Result<Vec<ExamCodeRecord>, AppError> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }

    /// Runs `produce` against the current records and appends its result.
    ///
    /// The write lock is held across both steps so a record computed from the
    /// collection size is never raced by another append. Nothing is appended
    /// when `produce` fails.
    pub fn commit<F>(&self, produce: F) -> Result<ExamCodeRecord, AppError>
    where
        F: FnOnce(&[ExamCodeRecord]) -> Result<ExamCodeRecord, AppError>,
    {
        let mut records = self.write()?;
        let record = produce(&records)?;
        records.push(record.clone());
        Ok(record)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<ExamCodeRecord>>, AppError> {
        self.records
            .read()
            .map_err(|e| AppError::InternalServerError(format!("record store poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<ExamCodeRecord>>, AppError> {
        self.records
            .write()
            .map_err(|e| AppError::InternalServerError(format!("record store poisoned: {}", e)))
    }
}

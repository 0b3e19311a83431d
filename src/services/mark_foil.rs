// src/services/mark_foil.rs

use std::sync::{Arc, Mutex};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    error::AppError,
    models::{
        exam_code::ExamCodeRecord,
        mark_foil::{MarkEntry, MarkFoilSelection},
    },
};

pub const FOIL_NO_MIN: u32 = 10_000;
pub const FOIL_NO_MAX: u32 = 99_999;

/// Supplies mark foil numbers. Swappable so tests can pin the value.
pub trait FoilNumberSource: Send {
    fn next_foil_number(&mut self) -> u32;
}

/// Uniform five-digit numbers from a `StdRng`.
pub struct RandomFoilNumbers {
    rng: StdRng,
}

impl RandomFoilNumbers {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FoilNumberSource for RandomFoilNumbers {
    fn next_foil_number(&mut self) -> u32 {
        self.rng.gen_range(FOIL_NO_MIN..=FOIL_NO_MAX)
    }
}

/// Mark foil state that lives as long as the process.
///
/// The foil number is drawn the first time a subject is selected and kept
/// for every later selection.
pub struct MarkFoilSession {
    mark_foil_no: Option<String>,
    source: Box<dyn FoilNumberSource>,
}

pub type SharedMarkFoilSession = Arc<Mutex<MarkFoilSession>>;

impl MarkFoilSession {
    pub fn new(source: Box<dyn FoilNumberSource>) -> Self {
        Self {
            mark_foil_no: None,
            source,
        }
    }

    pub fn shared(self) -> SharedMarkFoilSession {
        Arc::new(Mutex::new(self))
    }

    pub fn mark_foil_no(&self) -> Option<&str> {
        self.mark_foil_no.as_deref()
    }

    /// Returns the session's foil number, drawing it on first use.
    pub fn ensure_mark_foil_no(&mut self) -> String {
        if let Some(no) = &self.mark_foil_no {
            return no.clone();
        }
        let no = self.source.next_foil_number().to_string();
        tracing::info!(mark_foil_no = %no, "Generated mark foil number");
        self.mark_foil_no = Some(no.clone());
        no
    }

    /// Selects the foil subject and builds its blank rows.
    pub fn select_subject(
        &mut self,
        subject: &str,
        records: &[ExamCodeRecord],
    ) -> Result<MarkFoilSelection, AppError> {
        if subject.is_empty() {
            return Err(AppError::ValidationError(
                "Please select a subject".to_string(),
            ));
        }

        let mark_foil_no = self.ensure_mark_foil_no();

        Ok(MarkFoilSelection {
            subject: subject.to_string(),
            mark_foil_no,
            entries: mark_entries(records, subject),
        })
    }
}

/// One blank entry per record whose label equals `subject` exactly.
///
/// Unlike the listing filter this is an exact comparison on the composite
/// label, so "SCIENCE-MAT" never picks up "COMMERCE-MAT".
pub fn mark_entries(records: &[ExamCodeRecord], subject: &str) -> Vec<MarkEntry> {
    records
        .iter()
        .filter(|r| r.subject == subject)
        .map(|r| MarkEntry::blank(r.exam_code.clone()))
        .collect()
}

// src/report/mod.rs

//! Codesheet and mark foil documents.
//!
//! Layout functions are pure and return a [`layout::Layout`]; [`pdf`] turns a
//! layout into bytes. Tests exercise the layout math without writing PDFs.

pub mod codesheet;
pub mod layout;
pub mod mark_foil;
pub mod pdf;

use crate::{
    config::FormHeaders,
    error::AppError,
    models::{
        exam_code::ExamCodeRecord,
        mark_foil::{FormMetadata, MarkEntry},
    },
};

/// A finished document ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    headers: FormHeaders,
}

impl ReportRenderer {
    pub fn new(headers: FormHeaders) -> Self {
        Self { headers }
    }

    pub fn render_codesheet(
        &self,
        records: &[ExamCodeRecord],
    ) -> Result<RenderedDocument, AppError> {
        let layout = codesheet::codesheet_layout(&self.headers, records);
        if layout.overflows() {
            tracing::warn!(
                records = records.len(),
                "Codesheet runs past the page bottom; extra rows are cut off"
            );
        }

        let bytes = pdf::write_pdf("Exam Codesheet", &layout)?;
        tracing::info!(records = records.len(), "Rendered codesheet");

        Ok(RenderedDocument {
            file_name: codesheet::CODESHEET_FILE_NAME.to_string(),
            bytes,
        })
    }

    pub fn render_mark_foil(
        &self,
        subject: &str,
        metadata: &FormMetadata,
        entries: &[MarkEntry],
    ) -> Result<RenderedDocument, AppError> {
        let layout = mark_foil::mark_foil_layout(&self.headers, subject, metadata, entries);
        if layout.overflows() {
            tracing::warn!(
                entries = entries.len(),
                "Mark foil runs past the page bottom; extra rows are cut off"
            );
        }

        let bytes = pdf::write_pdf("Mark Foil", &layout)?;
        tracing::info!(
            subject = %subject,
            mark_foil_no = %metadata.mark_foil_no,
            entries = entries.len(),
            "Rendered mark foil"
        );

        Ok(RenderedDocument {
            file_name: mark_foil::mark_foil_file_name(subject, &metadata.mark_foil_no),
            bytes,
        })
    }
}

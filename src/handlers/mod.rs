// src/handlers/mod.rs

pub mod catalog;
pub mod exam_code;
pub mod mark_foil;

use axum::{http::header, response::IntoResponse};

use crate::report::RenderedDocument;

/// Wraps a rendered document as a PDF download.
pub(crate) fn pdf_attachment(document: RenderedDocument) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.file_name),
            ),
        ],
        document.bytes,
    )
}

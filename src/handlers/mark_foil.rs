// src/handlers/mark_foil.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::pdf_attachment,
    models::mark_foil::{FormMetadata, MarkFoilPdfRequest, SelectSubjectRequest},
    services::{
        mark_foil::{MarkFoilSession, mark_entries},
        query::distinct_subjects,
    },
    state::AppState,
    store::RecordStore,
};

fn lock_session(
    state: &AppState,
) -> Result<std::sync::MutexGuard<'_, MarkFoilSession>, AppError> {
    state
        .mark_foil
        .lock()
        .map_err(|e| AppError::InternalServerError(format!("mark foil session poisoned: {}", e)))
}

/// Lists the composite subject labels that have at least one exam code.
pub async fn list_subjects(State(store): State<RecordStore>) -> Result<impl IntoResponse, AppError> {
    let records = store.snapshot()?;
    Ok(Json(distinct_subjects(&records)))
}

/// Selects the foil subject.
///
/// Returns the session's mark foil number (drawn on the first selection) and
/// one blank entry per exam code of that exact subject.
pub async fn select_subject(
    State(state): State<AppState>,
    Json(payload): Json<SelectSubjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let records = state.store.snapshot()?;
    let selection = lock_session(&state)?.select_subject(&payload.subject, &records)?;

    Ok(Json(selection))
}

/// Downloads the mark foil for a subject.
///
/// Without `entries` the rows are derived blank from the store; without
/// `mark_foil_no` the session number is used.
pub async fn download_mark_foil(
    State(state): State<AppState>,
    Json(payload): Json<MarkFoilPdfRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entries = match payload.entries {
        Some(entries) => {
            for entry in &entries {
                entry.validate()?;
            }
            entries
        }
        None => mark_entries(&state.store.snapshot()?, &payload.subject),
    };

    let mark_foil_no = match payload.mark_foil_no.filter(|no| !no.is_empty()) {
        Some(no) => no,
        None => lock_session(&state)?.ensure_mark_foil_no(),
    };

    let metadata = FormMetadata {
        confidential_form_no: payload.confidential_form_no,
        semester: payload.semester,
        exam_type: payload.exam_type,
        mark_foil_no,
    };

    let document = state
        .renderer
        .render_mark_foil(&payload.subject, &metadata, &entries)?;

    Ok(pdf_attachment(document))
}

// src/handlers/exam_code.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::pdf_attachment,
    models::exam_code::{AssignRequest, ExamCodeListResponse, FilterParams},
    services::query::filter_records,
    state::AppState,
};

/// Assigns the next exam code to a roll number.
///
/// Returns 201 Created and the new record, or 400 when the stream, subject or
/// roll number is missing or the subject is not part of the stream.
pub async fn assign_exam_code(
    State(state): State<AppState>,
    Json(payload): Json<AssignRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = state.engine.submit(&state.store, &payload)?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Lists assigned exam codes, optionally filtered by stream and subject.
pub async fn list_exam_codes(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.snapshot()?;
    let filtered = filter_records(&state.catalog, &records, params.stream(), params.subject());

    Ok(Json(ExamCodeListResponse {
        total: records.len(),
        count: filtered.len(),
        records: filtered,
    }))
}

/// Downloads the three-column codesheet for the (optionally filtered) records.
pub async fn download_codesheet(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.snapshot()?;
    let filtered = filter_records(&state.catalog, &records, params.stream(), params.subject());

    let document = state.renderer.render_codesheet(&filtered)?;

    Ok(pdf_attachment(document))
}

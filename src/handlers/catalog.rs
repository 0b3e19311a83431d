// src/handlers/catalog.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, models::catalog::Catalog};

/// Lists every stream with its subjects, in catalog order.
pub async fn list_streams(State(catalog): State<Arc<Catalog>>) -> impl IntoResponse {
    Json(catalog.streams().to_vec())
}

/// Lists the subjects of one stream, looked up by stream name.
pub async fn list_subjects(
    State(catalog): State<Arc<Catalog>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stream = catalog
        .stream(&name)
        .ok_or_else(|| AppError::NotFound(format!("Stream '{}' not found", name)))?;

    Ok(Json(stream.subjects.clone()))
}

// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{catalog, exam_code, mark_foil},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (catalog, exam codes, mark foil).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (catalog, record store, mark foil session).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_DISPOSITION]);

    let catalog_routes = Router::new()
        .route("/", get(catalog::list_streams))
        .route("/{name}/subjects", get(catalog::list_subjects));

    let exam_code_routes = Router::new()
        .route(
            "/",
            get(exam_code::list_exam_codes).post(exam_code::assign_exam_code),
        )
        .route("/codesheet", get(exam_code::download_codesheet));

    let mark_foil_routes = Router::new()
        .route("/subjects", get(mark_foil::list_subjects))
        .route("/select", post(mark_foil::select_subject))
        .route("/pdf", post(mark_foil::download_mark_foil));

    Router::new()
        .nest("/api/streams", catalog_routes)
        .nest("/api/exam-codes", exam_code_routes)
        .nest("/api/mark-foil", mark_foil_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

mod document;
mod health;
mod plan;

use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let upload_limit = state.config().max_upload_bytes;

    Router::new()
        .route("/", get(health::root).fallback(fallback_handler))
        .route(
            "/generate_plan",
            post(plan::generate_plan).fallback(fallback_handler),
        )
        .route(
            "/analyze_pdf",
            post(document::analyze_pdf)
                .fallback(fallback_handler)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .nest("/health", health::router())
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    AppError::not_found("Endpoint non trovato").into_response()
}

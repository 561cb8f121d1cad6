use axum::{
    Router,
    http::StatusCode,
    routing::get,
};

use crate::{handlers, state::AppState};

pub const ERROR_PATH: &str = "/error";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::search))
        .route(ERROR_PATH, get(handlers::error_page))
        .route("/health", get(handlers::health))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .route("/{city}", get(handlers::city))
        .with_state(state)
}

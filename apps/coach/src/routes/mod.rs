pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::coaching::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route(
            "/api/v1/interviews/introduction",
            post(handlers::handle_introduction),
        )
        .route("/api/v1/interviews/turn", post(handlers::handle_turn))
        .route("/api/v1/interviews/result", post(handlers::handle_result))
        .fallback(not_found)
        .with_state(state)
}

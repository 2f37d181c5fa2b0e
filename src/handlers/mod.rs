pub mod items;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::{error::AppError, AppState};

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to the Example API!" }))
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let items = state.store.read().await.len();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "items": items,
        })),
    )
}

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};

use crate::{
    error::AppResult,
    extract::{ValidJson, ValidPath},
    models::Item,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.store.read().await.list_items().to_vec();
    debug!(count = items.len(), "Listed items");
    Json(items)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<Item>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let id = payload.id;
    let item = state.store.write().await.create_item(payload).inspect_err(|_| {
        warn!(id, "Rejected duplicate item id");
    })?;

    info!(id = item.id, name = %item.name, "Created item");

    Ok((StatusCode::CREATED, Json(item)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<Item>> {
    let item = state.store.read().await.get_item(id)?.clone();
    debug!(id, "Fetched item");
    Ok(Json(item))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(payload): ValidJson<Item>,
) -> AppResult<Json<Item>> {
    let item = state.store.write().await.update_item(id, payload).inspect_err(|_| {
        warn!(id, "Update of unknown item");
    })?;

    info!(id, new_id = item.id, name = %item.name, "Updated item");

    Ok(Json(item))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(State(state): State<AppState>, ValidPath(id): ValidPath<i64>) -> StatusCode {
    let removed = state.store.write().await.delete_item(id);
    info!(id, removed, "Deleted item");
    StatusCode::NO_CONTENT
}

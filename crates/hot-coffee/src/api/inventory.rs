use super::{ApiError, AppState};
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryItem, InventoryItemUpdate};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use resource_actor::ActorClient;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(fetch).put(update).delete(remove))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    Ok(Json(state.inventory.list().await?))
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<InventoryItem>, JsonRejection>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    let Json(item) = payload?;
    let item = state.inventory.add_item(item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryItem>, ApiError> {
    match state.inventory.get(id.clone()).await? {
        Some(item) => Ok(Json(item)),
        None => Err(InventoryError::NotFound(id).into()),
    }
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<InventoryItemUpdate>, JsonRejection>,
) -> Result<Json<InventoryItem>, ApiError> {
    let Json(update) = payload?;
    Ok(Json(state.inventory.update_item(id, update).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.inventory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

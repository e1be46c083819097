use super::{ApiError, AppState};
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemUpdate};
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

async fn list(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.menu.list().await?))
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MenuItem>, JsonRejection>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let Json(item) = payload?;
    let item = state.menu.add_item(item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    match state.menu.get(id.clone()).await? {
        Some(item) => Ok(Json(item)),
        None => Err(MenuError::NotFound(id).into()),
    }
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MenuItemUpdate>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Json(update) = payload?;
    Ok(Json(state.menu.update_item(id, update).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.menu.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

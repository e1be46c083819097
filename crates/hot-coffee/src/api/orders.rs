use super::{ApiError, AppState};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use resource_actor::ActorClient;
use serde_json::{json, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(fetch).put(update).delete(remove))
        .route("/{id}/close", post(close))
}

/// A path segment that is not of the form `order<N>` cannot name an existing order.
fn order_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse()
        .map_err(|_| OrderError::NotFound(raw.to_string()).into())
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list().await?))
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(params) = payload?;
    let order = state.orders.create_order(params).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let id = order_id(&id)?;
    match state.orders.get(id).await? {
        Some(order) => Ok(Json(order)),
        None => Err(OrderError::NotFound(id.to_string()).into()),
    }
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<OrderUpdate>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let id = order_id(&id)?;
    let Json(update) = payload?;
    Ok(Json(state.orders.update_order(id, update).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = order_id(&id)?;
    state.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn close(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = order_id(&id)?;
    state.orders.close_order(id).await?;
    Ok(Json(json!({ "message": "Order closed successfully" })))
}

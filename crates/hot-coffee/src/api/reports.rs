use super::{ApiError, AppState};
use crate::model::{AggregationSnapshot, MenuItem, TotalSales};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/total-sales", get(total_sales))
        .route("/popular-items", get(popular_item))
        .route("/daily-item", get(daily_item))
        .route("/summary", get(summary))
}

async fn total_sales(State(state): State<AppState>) -> Result<Json<TotalSales>, ApiError> {
    let total_sales = state.reports.total_sales().await?;
    Ok(Json(TotalSales { total_sales }))
}

/// 204 when there is no closed order to rank.
async fn popular_item(State(state): State<AppState>) -> Result<Response, ApiError> {
    Ok(match state.reports.popular_item().await? {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

async fn daily_item(State(state): State<AppState>) -> Result<Json<MenuItem>, ApiError> {
    Ok(Json(state.reports.daily_item().await?))
}

async fn summary(State(state): State<AppState>) -> Result<Json<AggregationSnapshot>, ApiError> {
    Ok(Json(state.reports.summary().await?))
}

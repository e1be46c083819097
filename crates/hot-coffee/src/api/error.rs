//! HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`. Domain errors convert with `?`, and the
//! response body is always `{"error": <message>, "kind": <kind>}` plus `"entity"` when a
//! specific id is at fault.

use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use crate::reports::ReportError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid request payload (400)
    #[error("{0}")]
    Validation(String),

    /// Unknown order, product or ingredient (404)
    #[error("{message}")]
    NotFound { message: String, entity: String },

    /// Duplicate id or mutation of a closed order (409)
    #[error("{message}")]
    Conflict { message: String, entity: String },

    /// Closing an order twice (400)
    #[error("{message}")]
    AlreadyClosed { message: String, entity: String },

    /// Stock does not cover an order being closed (500)
    #[error("{message}")]
    InsufficientStock { message: String, entity: String },

    /// No menu item to pick from (404)
    #[error("The menu is empty")]
    EmptyMenu,

    /// Storage or actor failure (500)
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<&'a str>,
}

impl ApiError {
    fn not_found(error: impl ToString, entity: String) -> Self {
        Self::NotFound {
            message: error.to_string(),
            entity,
        }
    }

    fn conflict(error: impl ToString, entity: String) -> Self {
        Self::Conflict {
            message: error.to_string(),
            entity,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::AlreadyClosed { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::EmptyMenu => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InsufficientStock { .. } | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Conflict { .. } => "conflict",
            ApiError::AlreadyClosed { .. } => "already_closed",
            ApiError::InsufficientStock { .. } => "insufficient_stock",
            ApiError::EmptyMenu => "empty_menu",
            ApiError::Internal(_) => "internal",
        }
    }

    fn entity(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { entity, .. }
            | ApiError::Conflict { entity, .. }
            | ApiError::AlreadyClosed { entity, .. }
            | ApiError::InsufficientStock { entity, .. } => Some(entity),
            ApiError::Validation(_) | ApiError::EmptyMenu | ApiError::Internal(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            error!(error = %msg, "Internal error occurred");
        }
        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
            entity: self.entity(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match &e {
            OrderError::NotFound(id)
            | OrderError::ProductNotInMenu(id)
            | OrderError::IngredientNotFound(id) => ApiError::not_found(&e, id.clone()),
            OrderError::Validation(_) => ApiError::Validation(e.to_string()),
            OrderError::Closed(id) => ApiError::conflict(&e, id.clone()),
            OrderError::AlreadyClosed(id) => ApiError::AlreadyClosed {
                message: e.to_string(),
                entity: id.clone(),
            },
            OrderError::InsufficientStock { ingredient_id, .. } => ApiError::InsufficientStock {
                message: e.to_string(),
                entity: ingredient_id.clone(),
            },
            OrderError::Storage(_) | OrderError::ActorCommunicationError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(e: MenuError) -> Self {
        match &e {
            MenuError::NotFound(id) => ApiError::not_found(&e, id.clone()),
            MenuError::AlreadyExists(id) => ApiError::conflict(&e, id.clone()),
            MenuError::Validation(_) => ApiError::Validation(e.to_string()),
            MenuError::Storage(_) | MenuError::ActorCommunicationError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        match &e {
            InventoryError::NotFound(id) => ApiError::not_found(&e, id.clone()),
            InventoryError::AlreadyExists(id) => ApiError::conflict(&e, id.clone()),
            InventoryError::Validation(_) => ApiError::Validation(e.to_string()),
            InventoryError::InsufficientStock { ingredient_id, .. } => {
                ApiError::InsufficientStock {
                    message: e.to_string(),
                    entity: ingredient_id.clone(),
                }
            }
            InventoryError::Storage(_) | InventoryError::ActorCommunicationError(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        match e {
            ReportError::EmptyMenu => ApiError::EmptyMenu,
            ReportError::Orders(e) => e.into(),
            ReportError::Menu(e) => e.into(),
            ReportError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

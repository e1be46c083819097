use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use resource_actor::StoreError;
use thiserror::Error;

/// Errors raised while building reports.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    #[error("The menu is empty")]
    EmptyMenu,

    #[error("Failed to read orders: {0}")]
    Orders(#[from] OrderError),

    #[error("Failed to read menu: {0}")]
    Menu(#[from] MenuError),

    /// Exporting the aggregation snapshot failed.
    #[error("Report storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for ReportError {
    fn from(e: StoreError) -> Self {
        ReportError::Storage(e.to_string())
    }
}

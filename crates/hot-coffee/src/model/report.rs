use super::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue over every closed order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalSales {
    pub total_sales: Decimal,
}

/// Derived report data, recomputed on every request and exported for inspection only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationSnapshot {
    pub total_sales: Decimal,
    #[serde(rename = "popular_items")]
    pub popular_item: Option<MenuItem>,
    pub daily_item: MenuItem,
}

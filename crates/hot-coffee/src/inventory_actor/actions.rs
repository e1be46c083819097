//! Custom actions for the Inventory actor.
//!
//! Deductions normally arrive batched in a single `Transact` request, one per ingredient of
//! an aggregated [`Demand`](crate::model::Demand), so the whole batch lands or none of it does.

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Removes the given quantity from stock.
    ///
    /// # Errors
    /// Fails if the quantity exceeds available stock or is not a non-negative quantity.
    Deduct(Decimal),
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// Stock left after the deduction.
    Deducted { remaining: Decimal },
}

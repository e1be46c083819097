//! Custom actions for the Order actor.

use crate::model::{Demand, Order};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Moves an open order to `closed`, drawing its ingredients down from inventory in the
    /// same commit.
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The closed order and the ingredient demand that was deducted for it.
    Closed { order: Order, demand: Demand },
}

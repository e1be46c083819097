//! ActorEntity trait implementation for the InventoryItem domain type.

use super::actions::{InventoryAction, InventoryActionResult};
use super::InventoryError;
use crate::model::{InventoryItem, InventoryItemUpdate, ValidationError};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = String;
    type Create = InventoryItem;
    type Update = InventoryItemUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    fn id(&self) -> &String {
        &self.ingredient_id
    }

    fn assign_id(_sequence: u32, params: &InventoryItem) -> String {
        params.ingredient_id.clone()
    }

    fn from_create_params(id: String, params: InventoryItem) -> Result<Self, InventoryError> {
        let item = InventoryItem {
            ingredient_id: id,
            ..params
        };
        item.validate()?;
        Ok(item)
    }

    async fn on_update(
        &mut self,
        update: InventoryItemUpdate,
        _ctx: &(),
    ) -> Result<(), InventoryError> {
        update.validate()?;
        if update
            .ingredient_id
            .as_deref()
            .is_some_and(|id| id != self.ingredient_id)
        {
            return Err(
                ValidationError::new("ingredient_id", "must match the item being updated").into(),
            );
        }
        self.name = update.name;
        self.quantity = update.quantity;
        self.unit = update.unit;
        Ok(())
    }

    /// # Actions
    /// - `Deduct`: subtracts the quantity, or fails naming the shortfall and leaves stock as is.
    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::Deduct(required) => {
                if required < Decimal::ZERO {
                    return Err(ValidationError::new("quantity", "must not be negative").into());
                }
                if self.quantity < required {
                    return Err(InventoryError::InsufficientStock {
                        ingredient_id: self.ingredient_id.clone(),
                        required,
                        available: self.quantity,
                    });
                }
                self.quantity -= required;
                Ok(InventoryActionResult::Deducted {
                    remaining: self.quantity,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn milk(quantity: Decimal) -> InventoryItem {
        InventoryItem::new("milk", "Milk", quantity, "ml")
    }

    #[tokio::test]
    async fn deduct_exactly_available_leaves_zero() {
        let mut item = milk(dec!(400));
        let result = item
            .handle_action(InventoryAction::Deduct(dec!(400)), &())
            .await
            .unwrap();
        assert_eq!(result, InventoryActionResult::Deducted { remaining: Decimal::ZERO });
    }

    #[tokio::test]
    async fn shortfall_names_ingredient_and_amounts() {
        let mut item = milk(dec!(150));
        let err = item
            .handle_action(InventoryAction::Deduct(dec!(400)), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                ingredient_id: "milk".into(),
                required: dec!(400),
                available: dec!(150),
            }
        );
        assert_eq!(item.quantity, dec!(150));
    }

    #[tokio::test]
    async fn update_rejects_mismatched_id() {
        let mut item = milk(dec!(1));
        let update = InventoryItemUpdate {
            ingredient_id: Some("cream".into()),
            name: "Milk".into(),
            quantity: dec!(5),
            unit: "ml".into(),
        };
        assert!(matches!(
            item.on_update(update, &()).await,
            Err(InventoryError::Validation(_))
        ));
        assert_eq!(item.quantity, dec!(1));
    }
}

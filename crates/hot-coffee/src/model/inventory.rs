//! Stock level of one ingredient.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait.
//! The quantity only changes through direct inventory management or through the
//! `Deduct` action applied while an order is closed.

use super::{require_text, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub ingredient_id: String,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
}

impl InventoryItem {
    pub fn new(
        ingredient_id: impl Into<String>,
        name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("ingredient_id", &self.ingredient_id)?;
        validate_fields(&self.name, self.quantity, &self.unit)
    }
}

fn validate_fields(name: &str, quantity: Decimal, unit: &str) -> Result<(), ValidationError> {
    require_text("name", name)?;
    if quantity < Decimal::ZERO {
        return Err(ValidationError::new("quantity", "must not be negative"));
    }
    require_text("unit", unit)
}

/// Full replacement of an inventory item's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    #[serde(default)]
    pub ingredient_id: Option<String>,
    pub name: String,
    pub quantity: Decimal,
    pub unit: String,
}

impl InventoryItemUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.quantity, &self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_quantity_is_rejected() {
        let item = InventoryItem::new("milk", "Milk", dec!(-0.5), "ml");
        assert_eq!(item.validate().unwrap_err().field, "quantity");
    }

    #[test]
    fn stored_numbers_are_read_exactly() {
        let json = r#"{"ingredient_id": "syrup", "name": "Syrup", "quantity": 0.3, "unit": "l"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, dec!(0.3));
        assert_eq!(serde_json::to_value(&item).unwrap()["quantity"], 0.3);
    }

    #[test]
    fn zero_quantity_is_allowed() {
        assert!(InventoryItem::new("milk", "Milk", Decimal::ZERO, "ml").validate().is_ok());
    }

    #[test]
    fn blank_identifying_fields_are_rejected() {
        let item = InventoryItem::new(" ", "Milk", dec!(1), "ml");
        assert_eq!(item.validate().unwrap_err().field, "ingredient_id");
        let item = InventoryItem::new("milk", "Milk", dec!(1), "");
        assert_eq!(item.validate().unwrap_err().field, "unit");
    }
}

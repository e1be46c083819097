//! A product sold by the shop, with the recipe used to draw down inventory.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
//! Menu ids are chosen by the caller; a duplicate id is rejected.

use super::{require_positive, require_text, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "product_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub ingredients: Vec<MenuItemIngredient>,
}

/// Quantity of one ingredient consumed per unit sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemIngredient {
    pub ingredient_id: String,
    pub quantity: Decimal,
}

impl MenuItemIngredient {
    pub fn new(ingredient_id: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
        }
    }
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        ingredients: Vec<MenuItemIngredient>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            ingredients,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("product_id", &self.id)?;
        validate_fields(&self.name, &self.description, self.price, &self.ingredients)
    }
}

fn validate_fields(
    name: &str,
    description: &str,
    price: Decimal,
    ingredients: &[MenuItemIngredient],
) -> Result<(), ValidationError> {
    require_text("name", name)?;
    require_text("description", description)?;
    require_positive("price", price)?;
    if ingredients.is_empty() {
        return Err(ValidationError::new("ingredients", "must not be empty"));
    }
    for ingredient in ingredients {
        require_text("ingredients.ingredient_id", &ingredient.ingredient_id)?;
        require_positive("ingredients.quantity", ingredient.quantity)?;
    }
    Ok(())
}

/// Full replacement of a menu item. The id comes from the path; when the body repeats it,
/// it must match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(default)]
    pub product_id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub ingredients: Vec<MenuItemIngredient>,
}

impl MenuItemUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, &self.description, self.price, &self.ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn latte() -> MenuItem {
        MenuItem::new(
            "latte",
            "Caffe Latte",
            "Espresso with steamed milk",
            dec!(3.5),
            vec![
                MenuItemIngredient::new("espresso_shot", dec!(1)),
                MenuItemIngredient::new("milk", dec!(200)),
            ],
        )
    }

    #[test]
    fn wire_format_uses_product_id() {
        let json = serde_json::to_value(latte()).unwrap();
        assert_eq!(json["product_id"], "latte");
        assert_eq!(json["ingredients"][1]["ingredient_id"], "milk");
        assert_eq!(json["price"], 3.5);
        assert_eq!(json["ingredients"][1]["quantity"], 200.0);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn rejects_non_positive_price_and_empty_recipe() {
        let mut item = latte();
        item.price = Decimal::ZERO;
        assert_eq!(item.validate().unwrap_err().field, "price");

        let mut item = latte();
        item.ingredients.clear();
        assert_eq!(item.validate().unwrap_err().field, "ingredients");

        let mut item = latte();
        item.ingredients[0].quantity = dec!(-1);
        assert_eq!(item.validate().unwrap_err().field, "ingredients.quantity");
    }
}

use crate::model::{Demand, MenuItem, OrderLine};
use rust_decimal::Decimal;

/// A point-in-time copy of the menu used for recipe and price lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, product_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sums the ingredient requirements of every line into one demand map.
    ///
    /// Fails with the first product id that has no menu entry.
    pub fn demand_for(&self, lines: &[OrderLine]) -> Result<Demand, String> {
        let mut demand = Demand::new();
        for line in lines {
            let item = self
                .get(&line.product_id)
                .ok_or_else(|| line.product_id.clone())?;
            for ingredient in &item.ingredients {
                demand.add(
                    &ingredient.ingredient_id,
                    ingredient.quantity * Decimal::from(line.quantity),
                );
            }
        }
        Ok(demand)
    }
}

impl From<Vec<MenuItem>> for MenuCatalog {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::new(items)
    }
}

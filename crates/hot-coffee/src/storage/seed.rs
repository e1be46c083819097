use super::{INVENTORY_KEY, MENU_KEY, ORDERS_KEY};
use crate::model::{InventoryItem, MenuItem, MenuItemIngredient, Order};
use resource_actor::{Backend, Repository, StoreError};
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "latte",
            "Caffe Latte",
            "Espresso with steamed milk",
            dec!(3.5),
            vec![
                MenuItemIngredient::new("espresso_shot", dec!(1.0)),
                MenuItemIngredient::new("milk", dec!(200.0)),
            ],
        ),
        MenuItem::new(
            "muffin",
            "Blueberry Muffin",
            "Freshly baked muffin with blueberries",
            dec!(2.0),
            vec![
                MenuItemIngredient::new("flour", dec!(100.0)),
                MenuItemIngredient::new("blueberries", dec!(20.0)),
                MenuItemIngredient::new("sugar", dec!(30.0)),
            ],
        ),
        MenuItem::new(
            "espresso",
            "Espresso",
            "Strong and bold coffee",
            dec!(2.5),
            vec![MenuItemIngredient::new("espresso_shot", dec!(10.0))],
        ),
    ]
}

pub fn default_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("espresso_shot", "Espresso Shot", dec!(372.0), "shots"),
        InventoryItem::new("milk", "Milk", dec!(3400.0), "ml"),
        InventoryItem::new("flour", "Flour", dec!(9400.0), "g"),
        InventoryItem::new("blueberries", "Blueberries", dec!(1800.0), "g"),
        InventoryItem::new("sugar", "Sugar", dec!(4750.0), "g"),
    ]
}

/// Writes the default menu and inventory, and an empty order list, for every file that does
/// not exist yet. Existing files, even empty ones, are left alone.
///
/// Returns the keys that were written.
pub async fn seed_defaults(backend: &Arc<dyn Backend>) -> Result<Vec<&'static str>, StoreError> {
    let mut seeded = Vec::new();
    if seed_missing(backend, MENU_KEY, &default_menu()).await? {
        seeded.push(MENU_KEY);
    }
    if seed_missing(backend, INVENTORY_KEY, &default_inventory()).await? {
        seeded.push(INVENTORY_KEY);
    }
    if seed_missing::<Order>(backend, ORDERS_KEY, &[]).await? {
        seeded.push(ORDERS_KEY);
    }
    if !seeded.is_empty() {
        info!(files = ?seeded, "Seeded data directory");
    }
    Ok(seeded)
}

async fn seed_missing<T: Serialize + DeserializeOwned>(
    backend: &Arc<dyn Backend>,
    key: &'static str,
    items: &[T],
) -> Result<bool, StoreError> {
    if backend.read(key).await?.is_some() {
        return Ok(false);
    }
    Repository::new(backend.clone(), key).save_all(items).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::MemoryBackend;

    #[tokio::test]
    async fn seeds_only_missing_files() {
        let memory = Arc::new(MemoryBackend::new());
        memory.insert(INVENTORY_KEY, "[]");
        let backend: Arc<dyn Backend> = memory.clone();

        let seeded = seed_defaults(&backend).await.unwrap();
        assert_eq!(seeded, vec![MENU_KEY, ORDERS_KEY]);
        assert_eq!(memory.get(INVENTORY_KEY).unwrap(), b"[]");

        let menu: Vec<MenuItem> = serde_json::from_slice(&memory.get(MENU_KEY).unwrap()).unwrap();
        assert_eq!(menu, default_menu());

        assert!(seed_defaults(&backend).await.unwrap().is_empty());
    }

    #[test]
    fn every_recipe_ingredient_is_stocked() {
        let stocked: Vec<_> = default_inventory()
            .into_iter()
            .map(|item| item.ingredient_id)
            .collect();
        for item in default_menu() {
            assert!(item.validate().is_ok());
            for ingredient in item.ingredients {
                assert!(stocked.contains(&ingredient.ingredient_id));
            }
        }
    }
}

//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! Menu ids are chosen by the caller, so `assign_id` reads the id from the payload and the
//! actor rejects a duplicate before `from_create_params` runs.

use super::MenuError;
use crate::model::{MenuItem, MenuItemUpdate, ValidationError};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = String;
    type Create = MenuItem;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> &String {
        &self.id
    }

    fn assign_id(_sequence: u32, params: &MenuItem) -> String {
        params.id.clone()
    }

    fn from_create_params(id: String, params: MenuItem) -> Result<Self, MenuError> {
        let item = MenuItem { id, ..params };
        item.validate()?;
        Ok(item)
    }

    /// Replaces every mutable field. A `product_id` repeated in the body must match.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        update.validate()?;
        if update.product_id.as_deref().is_some_and(|id| id != self.id) {
            return Err(ValidationError::new("product_id", "must match the item being updated").into());
        }
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.ingredients = update.ingredients;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }
}

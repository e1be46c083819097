use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Ingredient id → total quantity required, summed over every line of one order.
///
/// Keys iterate in ingredient-id order, so the deductions derived from a demand map are
/// applied (and reported) in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Demand(BTreeMap<String, Decimal>);

impl Demand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ingredient_id: &str, quantity: Decimal) {
        *self.0.entry(ingredient_id.to_string()).or_insert(Decimal::ZERO) += quantity;
    }

    pub fn get(&self, ingredient_id: &str) -> Option<Decimal> {
        self.0.get(ingredient_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for Demand {
    type Item = (String, Decimal);
    type IntoIter = std::collections::btree_map::IntoIter<String, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fleamarket_core::ItemId;

/// Sentinel meaning "no known price".
pub const NO_PRICE: f64 = -1.0;

/// Live market price table, keyed by item identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(HashMap<ItemId, f64>);

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current price, or [`NO_PRICE`] when the item has no entry.
    pub fn get(&self, id: &ItemId) -> f64 {
        self.0.get(id).copied().unwrap_or(NO_PRICE)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.contains_key(id)
    }

    pub fn set(&mut self, id: ItemId, price: f64) {
        self.0.insert(id, price);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &f64)> {
        self.0.iter()
    }
}

impl FromIterator<(ItemId, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (ItemId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

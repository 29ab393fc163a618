use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fleamarket_core::ItemId;

use crate::prices::NO_PRICE;

/// One handbook reference row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandbookEntry {
    #[serde(rename = "Id")]
    pub id: ItemId,

    #[serde(rename = "ParentId", default)]
    pub parent_id: String,

    /// Reference price; `None` when the host has no value for it.
    #[serde(rename = "Price", default)]
    pub price: Option<f64>,
}

impl HandbookEntry {
    pub fn new(id: impl Into<ItemId>, price: f64) -> Self {
        Self {
            id: id.into(),
            parent_id: String::new(),
            price: Some(price),
        }
    }
}

/// Handbook reference list with an identifier index.
///
/// Duplicate identifiers resolve to the first row, as a front-to-back scan would.
#[derive(Debug, Clone, Default)]
pub struct Handbook {
    entries: Vec<HandbookEntry>,
    index: HashMap<ItemId, usize>,
}

impl Handbook {
    pub fn new(entries: Vec<HandbookEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            index.entry(entry.id.clone()).or_insert(pos);
        }
        Self { entries, index }
    }

    pub fn entries(&self) -> &[HandbookEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: &ItemId) -> Option<&HandbookEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Reference price, or [`NO_PRICE`] when there is no row or the row has no price.
    pub fn price(&self, id: &ItemId) -> f64 {
        self.entry(id).and_then(|e| e.price).unwrap_or(NO_PRICE)
    }
}

impl From<Vec<HandbookEntry>> for Handbook {
    fn from(entries: Vec<HandbookEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<HandbookEntry> for Handbook {
    fn from_iter<I: IntoIterator<Item = HandbookEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

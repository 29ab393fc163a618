//! Seams to the host catalog and market-index services.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::handbook::Handbook;
use crate::item::ItemTable;
use crate::prices::PriceTable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("price table write-back failed: {0}")]
    WriteBack(String),

    #[error("market index refresh failed: {0}")]
    IndexRefresh(String),

    #[error("catalog lock poisoned")]
    LockPoisoned,
}

/// Host catalog: read-only templates and handbook, plus the live price table.
pub trait CatalogStore: Send + Sync + 'static {
    fn items(&self) -> &ItemTable;

    fn handbook(&self) -> &Handbook;

    /// Owned snapshot of the live price table.
    fn prices(&self) -> Result<PriceTable, CatalogError>;

    /// Replace the live price table with a fully mutated one.
    fn write_prices(&self, prices: PriceTable) -> Result<(), CatalogError>;
}

/// Market index that caches prices derived from the live table.
pub trait MarketIndex: Send + Sync + 'static {
    fn refresh_static_prices(&self) -> Result<(), CatalogError>;

    fn refresh_dynamic_prices(&self) -> Result<(), CatalogError>;
}

/// In-memory catalog.
///
/// Intended for tests/dev and for hosts that already hold their tables in memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: ItemTable,
    handbook: Handbook,
    prices: RwLock<PriceTable>,
    writes: AtomicU64,
}

impl InMemoryCatalog {
    pub fn new(items: ItemTable, handbook: Handbook, prices: PriceTable) -> Self {
        Self {
            items,
            handbook,
            prices: RwLock::new(prices),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of successful write-backs so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn items(&self) -> &ItemTable {
        &self.items
    }

    fn handbook(&self) -> &Handbook {
        &self.handbook
    }

    fn prices(&self) -> Result<PriceTable, CatalogError> {
        let prices = self.prices.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(prices.clone())
    }

    fn write_prices(&self, prices: PriceTable) -> Result<(), CatalogError> {
        let mut live = self.prices.write().map_err(|_| CatalogError::LockPoisoned)?;
        *live = prices;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Market index stub that only counts refresh signals.
#[derive(Debug, Default)]
pub struct InMemoryMarketIndex {
    static_refreshes: AtomicU64,
    dynamic_refreshes: AtomicU64,
}

impl InMemoryMarketIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn static_refreshes(&self) -> u64 {
        self.static_refreshes.load(Ordering::SeqCst)
    }

    pub fn dynamic_refreshes(&self) -> u64 {
        self.dynamic_refreshes.load(Ordering::SeqCst)
    }
}

impl MarketIndex for InMemoryMarketIndex {
    fn refresh_static_prices(&self) -> Result<(), CatalogError> {
        self.static_refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn refresh_dynamic_prices(&self) -> Result<(), CatalogError> {
        self.dynamic_refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

//! Catalog data model and the seams to the host catalog service.
//!
//! The host owns item templates, handbook reference prices and the live price
//! table. This crate models them and defines the traits the refresh pass talks
//! through; it contains no pricing rules.

pub mod handbook;
pub mod item;
pub mod prices;
pub mod store;

pub use handbook::{Handbook, HandbookEntry};
pub use item::{ItemDefinition, ItemProperties, ItemTable, Slot, SlotFilter, SlotProperties};
pub use prices::{NO_PRICE, PriceTable};
pub use store::{CatalogError, CatalogStore, InMemoryCatalog, InMemoryMarketIndex, MarketIndex};

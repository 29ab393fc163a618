//! `fleamarket-core` — shared building blocks for the flea market repricer.
//!
//! This crate contains **pure** primitives (no IO, no storage).

pub mod error;
pub mod id;

pub use error::{PricingError, PricingResult};
pub use id::ItemId;

//! `fleamarket-pricing`
//!
//! **Responsibility:** price derivation rules.
//!
//! - Classify items into categories from their parent type.
//! - Resolve handbook base prices, folding in required built-in plates.
//! - Turn a base price into a market price (random scaling, category
//!   multiplier, bound clamping).
//!
//! Nothing here touches the live price table; that is the refresh pass's job.

pub mod adjuster;
pub mod base_price;
pub mod category;
pub mod config;

#[cfg(test)]
mod test_support;

pub use adjuster::{Adjustment, Clamp, PriceAdjuster};
pub use base_price::BasePriceResolver;
pub use category::{Category, classify};
pub use config::{ConfigError, RefreshConfig};

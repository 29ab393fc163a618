//! Market price refresh: the single pass and its periodic runner.

mod error;
mod pass;
mod runner;

pub use error::RefreshError;
pub use pass::{MarketRefresher, RefreshReport};
pub use runner::{RefreshRunner, RefreshRunnerHandle};

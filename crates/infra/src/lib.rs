//! Infrastructure layer: refresh orchestration and scheduling over the host catalog.

pub mod refresh;


pub use refresh::{MarketRefresher, RefreshError, RefreshReport, RefreshRunner, RefreshRunnerHandle};

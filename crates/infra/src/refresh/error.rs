use thiserror::Error;

use fleamarket_catalog::CatalogError;

#[derive(Debug, Error)]
pub enum RefreshError {
    /// Write-back or market-index signal failed; the pass is not retried.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to spawn refresh runner: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("refresh runner panicked")]
    RunnerPanicked,
}

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use fleamarket_catalog::{CatalogStore, MarketIndex, NO_PRICE};
use fleamarket_core::ItemId;
use fleamarket_pricing::{BasePriceResolver, PriceAdjuster, RefreshConfig, classify};

use super::error::RefreshError;

/// Summary of one refresh pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshReport {
    /// Templates visited (placeholders included).
    pub examined: usize,
    /// Prices written with a new value.
    pub updated: usize,
    /// Tradeable items left untouched for lack of a usable base or current price.
    pub skipped: usize,
    pub completed_at: DateTime<Utc>,
}

/// Recomputes every market price from the handbook, one pass at a time.
///
/// A pass knows nothing about timers; see [`RefreshRunner`](super::RefreshRunner)
/// for periodic execution.
#[derive(Debug)]
pub struct MarketRefresher<C, M> {
    catalog: Arc<C>,
    index: Arc<M>,
    config: Arc<RefreshConfig>,
}

impl<C, M> MarketRefresher<C, M>
where
    C: CatalogStore,
    M: MarketIndex,
{
    pub fn new(catalog: Arc<C>, index: Arc<M>, config: Arc<RefreshConfig>) -> Self {
        Self {
            catalog,
            index,
            config,
        }
    }

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    /// Run one pass with the thread-local RNG.
    pub fn run_pass(&self) -> Result<RefreshReport, RefreshError> {
        self.run_pass_with_rng(&mut rand::thread_rng())
    }

    /// Run one pass, drawing price noise from `rng`.
    ///
    /// Items are visited in identifier order. Missing data is skipped silently;
    /// only write-back and index-refresh failures are returned.
    pub fn run_pass_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<RefreshReport, RefreshError> {
        let config = self.config.as_ref();
        if config.debug {
            info!("Flea market repricer debug mode enabled, printing values!");
            match serde_json::to_string_pretty(config) {
                Ok(dump) => info!("{dump}"),
                Err(e) => warn!(error = %e, "failed to render config"),
            }
        }

        let items = self.catalog.items();
        let resolver = BasePriceResolver::new(items, self.catalog.handbook())
            .with_parts_logging(config.verbose_parts());
        let adjuster = PriceAdjuster::new(config);
        let mut prices = self.catalog.prices()?;

        let mut ids: Vec<&ItemId> = items.keys().collect();
        ids.sort();

        let mut updated = 0usize;
        let mut skipped = 0usize;
        for id in &ids {
            let item = &items[*id];
            if !item.is_tradeable() {
                continue;
            }

            let base_price = match resolver.resolve_item(item) {
                Ok(p) => p,
                Err(e) => {
                    warn!(item = %item.id, error = %e, "skipping item with unresolvable base price");
                    skipped += 1;
                    continue;
                }
            };
            if base_price <= NO_PRICE || base_price.is_nan() {
                skipped += 1;
                continue;
            }

            let current = prices.get(&item.id);
            if current <= NO_PRICE || current.is_nan() {
                skipped += 1;
                continue;
            }

            let category = classify(&item.parent);
            let adjustment = adjuster.adjust(base_price, category, item.display_name(), rng);
            let new_price = adjustment.price as f64;
            if new_price != current {
                debug!(item = %item.id, from = current, to = new_price, "price changed");
                prices.set(item.id.clone(), new_price);
                updated += 1;
            }
        }

        self.catalog.write_prices(prices)?;
        self.index.refresh_static_prices()?;
        self.index.refresh_dynamic_prices()?;

        info!(updated, skipped, "Done running! Updated {updated} items");

        Ok(RefreshReport {
            examined: ids.len(),
            updated,
            skipped,
            completed_at: Utc::now(),
        })
    }
}

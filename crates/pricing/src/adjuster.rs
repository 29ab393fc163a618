//! Base price -> market price.

use rand::Rng;
use tracing::info;

use crate::category::Category;
use crate::config::RefreshConfig;

/// Which bound a price was clamped to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Clamp {
    Lower,
    Upper,
}

/// Outcome of adjusting one base price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Final rounded market price.
    pub price: i64,
    /// Randomised baseline multiplier drawn for this item.
    pub value_mult: f64,
    pub category_mult: f64,
    pub clamp: Option<Clamp>,
}

/// Applies randomised scaling, the category multiplier and bound clamping.
#[derive(Debug, Clone, Copy)]
pub struct PriceAdjuster<'c> {
    config: &'c RefreshConfig,
}

impl<'c> PriceAdjuster<'c> {
    pub fn new(config: &'c RefreshConfig) -> Self {
        Self { config }
    }

    /// Draw `baseValueMult * (1 + U)` with `U` uniform in `[-|spread|, |spread|]`.
    pub fn draw_value_mult<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let spread = self.config.base_value_randomization;
        let u = if spread != 0.0 {
            rng.gen_range(-1.0..=1.0) * spread
        } else {
            0.0
        };
        self.config.base_value_mult * (1.0 + u)
    }

    /// Adjust `base_price` for an item of `category`; `label` only feeds diagnostics.
    ///
    /// Callers must filter out sentinel and non-finite base prices first.
    pub fn adjust<R: Rng + ?Sized>(
        &self,
        base_price: f64,
        category: Category,
        label: &str,
        rng: &mut R,
    ) -> Adjustment {
        let value_mult = self.draw_value_mult(rng);
        self.adjust_with_value_mult(base_price, category, label, value_mult)
    }

    /// Deterministic part of [`adjust`](Self::adjust), with the random draw supplied.
    pub fn adjust_with_value_mult(
        &self,
        base_price: f64,
        category: Category,
        label: &str,
        value_mult: f64,
    ) -> Adjustment {
        let unscaled = base_price * value_mult;
        let mut price = unscaled;

        let category_mult = self.config.category_multiplier(category);
        if category_mult != 1.0 {
            price *= category_mult;
            if self.config.verbose_category() {
                info!(
                    category = %category,
                    "Applying category multiplier to {label}: {category_mult} = {price}"
                );
            }
        }

        let lower = base_price * self.config.lower_bound_mult;
        let upper = base_price * self.config.upper_bound_mult;
        let mut clamp = None;
        if price < lower {
            price = lower;
            clamp = Some(Clamp::Lower);
            if self.config.verbose_bounds() {
                info!("Setting {label} flea price to lower bound: {lower}; was {unscaled}");
            }
        } else if price > upper {
            price = upper;
            clamp = Some(Clamp::Upper);
            if self.config.verbose_bounds() {
                info!("Setting {label} flea price to upper bound: {upper}; was {unscaled}");
            }
        }

        Adjustment {
            price: price.round() as i64,
            value_mult,
            category_mult,
            clamp,
        }
    }
}

//! Refresh configuration (loaded once, immutable afterwards).

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the price refresh.
///
/// Field names follow the JSON document (`baseValueMult`, `rerunTimeSeconds`, ...).
/// Every field has a default, so a partial document is valid. Loading rejects
/// only negative or non-finite multipliers and non-finite numbers; odd but
/// workable settings are logged (see [`RefreshConfig::warnings`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefreshConfig {
    /// Log every internal decision.
    pub debug: bool,

    /// Baseline multiplier applied to every base price.
    pub base_value_mult: f64,

    /// Symmetric spread of the random perturbation around the baseline, usually in \[0, 1\].
    pub base_value_randomization: f64,

    /// Per-category multipliers; missing categories use 1.0.
    pub category_multipliers: HashMap<Category, f64>,

    pub lower_bound_mult: f64,
    pub upper_bound_mult: f64,

    pub category_mult_logging: bool,
    pub bound_logging: bool,
    pub required_parts_logging: bool,

    /// Seconds between passes; `<= 0` disables reruns.
    pub rerun_time_seconds: f64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            debug: false,
            base_value_mult: 1.0,
            base_value_randomization: 0.1,
            category_multipliers: HashMap::new(),
            lower_bound_mult: 0.5,
            upper_bound_mult: 2.0,
            category_mult_logging: false,
            bound_logging: false,
            required_parts_logging: false,
            rerun_time_seconds: 0.0,
        }
    }
}

impl RefreshConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = |name: &str, v: f64| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number (got {v})"
                )))
            }
        };

        non_negative("baseValueMult", self.base_value_mult)?;
        non_negative("lowerBoundMult", self.lower_bound_mult)?;
        non_negative("upperBoundMult", self.upper_bound_mult)?;

        if !self.base_value_randomization.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "baseValueRandomization must be finite (got {})",
                self.base_value_randomization
            )));
        }

        for warning in self.warnings() {
            warn!("{warning}");
        }

        for (category, mult) in &self.category_multipliers {
            non_negative(&format!("categoryMultipliers.{category}"), *mult)?;
        }

        if self.rerun_time_seconds.is_nan() || self.rerun_time_seconds.is_infinite() {
            return Err(ConfigError::Invalid("rerunTimeSeconds must be finite".to_string()));
        }

        Ok(())
    }

    /// Settings that load fine but rarely mean what the author intended.
    ///
    /// A spread outside \[0, 1\] can push the random multiplier negative; the
    /// lower bound still catches it. Inverted bounds clamp low prices up to
    /// `lowerBoundMult` and everything else down to `upperBoundMult`.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !(0.0..=1.0).contains(&self.base_value_randomization) {
            out.push(format!(
                "baseValueRandomization {} is outside [0, 1]",
                self.base_value_randomization
            ));
        }
        if self.lower_bound_mult > self.upper_bound_mult {
            out.push(format!(
                "lowerBoundMult ({}) exceeds upperBoundMult ({})",
                self.lower_bound_mult, self.upper_bound_mult
            ));
        }
        out
    }

    pub fn category_multiplier(&self, category: Category) -> f64 {
        self.category_multipliers.get(&category).copied().unwrap_or(1.0)
    }

    pub fn with_category_multiplier(mut self, category: Category, mult: f64) -> Self {
        self.category_multipliers.insert(category, mult);
        self
    }

    /// Delay before the next pass, or `None` when reruns are disabled.
    pub fn rerun_interval(&self) -> Option<Duration> {
        if self.rerun_time_seconds > 0.0 {
            Duration::try_from_secs_f64(self.rerun_time_seconds).ok()
        } else {
            None
        }
    }

    pub fn verbose_category(&self) -> bool {
        self.debug || self.category_mult_logging
    }

    pub fn verbose_bounds(&self) -> bool {
        self.debug || self.bound_logging
    }

    pub fn verbose_parts(&self) -> bool {
        self.debug || self.required_parts_logging
    }
}

// src/pricing/curve_config.rs

//! Curve configuration and the parameter ranges exposed to configuration
//! layers. The ranges bound what external callers may ask for; the core only
//! validates the constraints it depends on (positive slopes, tax below 1).

use serde::{Deserialize, Serialize};

use crate::errors::SimulatorError;
use crate::scenarios::scenario_trait::ScenarioExtras;
use crate::scenarios::scenario_type::ScenarioType;

// --- Supply and price bounds ---
pub const MIN_SUPPLY: u32 = 100;
pub const MAX_SUPPLY: u32 = 2_000_000;
pub const MIN_PRICE: f64 = 0.0;
pub const MAX_PRICE: f64 = 100.0;
pub const PRICE_STEP: f64 = 10.0;

// --- Curve slope ---
pub const MIN_SLOPE: f64 = 1.0;
pub const MAX_SLOPE: f64 = 100.0;
pub const SLOPE_STEP: f64 = 10.0;

// --- Vertical displacement: Buy - Sell at t(0) ---
pub const K_MIN: f64 = 0.0;
pub const K_MAX: f64 = 500.0;
pub const K_STEP: f64 = 10.0;

// --- Tax rate ---
pub const T_MIN: f64 = 0.0;
pub const T_MAX: f64 = 1.0;
pub const T_STEP: f64 = 0.01;

/// Immutable curve configuration for one pricing-table evaluation.
///
/// The buy curve is parameterized by (a1, b1, c1) and the sell curve by
/// (a2, b2, c2); `vertical_displacement` (k), `horizontal_displacement` (h)
/// and `tax_rate` (t) feed the scenario-specific fee mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub scenario: ScenarioType,
    /// a1: maximum buy price is 2 * a1.
    pub buy_price_scale: f64,
    /// b1: supply at which the buy curve inflects.
    pub buy_inflection: f64,
    /// c1: transition width of the buy curve; must be positive.
    pub buy_slope: f64,
    /// k: vertical displacement between buy and sell curves at t(0).
    pub vertical_displacement: f64,
    /// t: tax rate in [0, 1).
    pub tax_rate: f64,
    /// a2: maximum sell price is 2 * a2.
    pub sell_price_scale: f64,
    /// b2: supply at which the sell curve inflects.
    pub sell_inflection: f64,
    /// c2: transition width of the sell curve; must be positive.
    pub sell_slope: f64,
    /// h: horizontal displacement of the sell curve.
    pub horizontal_displacement: f64,
}

impl CurveConfig {
    /// The default parameterization used to bootstrap a fresh market:
    /// no-fee scenario, inflection at half supply, slope a tenth of the
    /// slope ceiling, and mid-range displacements.
    pub fn bootstrapped(supply: u32, price: f64) -> Self {
        Self {
            scenario: ScenarioType::NoFee,
            buy_price_scale: price,
            buy_inflection: f64::from(supply) / 2.0,
            buy_slope: MAX_SLOPE / 10.0,
            vertical_displacement: K_MAX / 2.0,
            tax_rate: T_MAX / 5.0,
            sell_price_scale: price,
            sell_inflection: f64::from(supply) / 2.0,
            sell_slope: MAX_SLOPE / 10.0,
            horizontal_displacement: f64::from(supply) / 5.0,
        }
    }

    /// Checks the constraints the pricing math depends on.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if !(self.buy_slope > 0.0) {
            return Err(SimulatorError::Configuration(format!(
                "buy_slope must be positive, got {}",
                self.buy_slope
            )));
        }
        if !(self.sell_slope > 0.0) {
            return Err(SimulatorError::Configuration(format!(
                "sell_slope must be positive, got {}",
                self.sell_slope
            )));
        }
        if !(self.tax_rate >= 0.0 && self.tax_rate < 1.0) {
            return Err(SimulatorError::Configuration(format!(
                "tax_rate must lie in [0, 1), got {}",
                self.tax_rate
            )));
        }
        Ok(())
    }

    /// The scenario-specific parameters, in the shape the curve functions take.
    pub fn extras(&self) -> ScenarioExtras {
        ScenarioExtras {
            k: self.vertical_displacement,
            h: self.horizontal_displacement,
            t: self.tax_rate,
        }
    }
}

// src/pricing/sigmoid_model.rs

use log::{debug, info};

use super::curve_config::CurveConfig;
use super::table::{PricingRow, PricingTable};
use crate::errors::SimulatorError;

/// Decimal places kept on the derived tax/fund columns. Quantizing them
/// suppresses floating-point noise in downstream comparisons.
const DERIVED_DECIMALS: i32 = 4;

/// Slack allowed when enforcing buy >= sell, so that scenarios which close
/// the spread asymptotically are not rejected for round-off.
const ORDERING_EPS: f64 = 1e-9;

/// A bonding curve that can be evaluated into a dense pricing schedule.
pub trait BondingCurveModel {
    fn evaluate(
        &self,
        max_supply: u32,
        config: &CurveConfig,
    ) -> Result<PricingTable, SimulatorError>;
}

/// The sigmoidal bonding curve family. Evaluation walks the integer supply
/// grid once, dispatching to the configured taxation scenario.
pub struct SigmoidCurve;

impl BondingCurveModel for SigmoidCurve {
    fn evaluate(
        &self,
        max_supply: u32,
        config: &CurveConfig,
    ) -> Result<PricingTable, SimulatorError> {
        config.validate()?;
        if max_supply == 0 {
            return Err(SimulatorError::Configuration(
                "max_supply must be at least 1".to_string(),
            ));
        }

        info!("evaluating curve: {:?}", config);

        // Resolve the scenario tag once; never per row.
        let scenario = config.scenario.scenario();
        debug!("scenario: {}", scenario.description());
        let extras = config.extras();
        let (a1, b1, c1) = (config.buy_price_scale, config.buy_inflection, config.buy_slope);
        let (a2, b2, c2) = (config.sell_price_scale, config.sell_inflection, config.sell_slope);

        let mut rows = Vec::with_capacity(max_supply as usize + 1);
        for supply in 0..=max_supply {
            let x = f64::from(supply);
            let buy_price = scenario.buy_price(x, a1, b1, c1, &extras);
            let sell_price = scenario.sell_price(x, a2, b2, c2, &extras);
            let buy_collateral = scenario.buy_collateral(x, a1, b1, c1, &extras);
            let sell_collateral = scenario.sell_collateral(x, a2, b2, c2, &extras);

            if scenario.guarantees_buy_over_sell() && buy_price < sell_price - ORDERING_EPS {
                return Err(SimulatorError::InvariantViolation(format!(
                    "buy_price {buy_price} < sell_price {sell_price} at supply {supply} \
                     under scenario {}",
                    config.scenario.tag()
                )));
            }

            rows.push(PricingRow {
                supply,
                buy_price,
                sell_price,
                buy_collateral,
                sell_collateral,
                tax_rate: round_derived(safe_ratio(sell_price, buy_price)),
                tax_amount: round_derived(buy_price - sell_price),
                fund_rate: round_derived(safe_ratio(sell_collateral, buy_collateral)),
                fund_amount: round_derived(buy_collateral - sell_collateral),
            });
        }

        Ok(PricingTable::new(rows))
    }
}

/// 1 - numerator/denominator, with a zero sentinel where the denominator is
/// zero (only possible at supply 0) or the ratio is otherwise non-finite.
fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let rate = 1.0 - numerator / denominator;
    if rate.is_finite() { rate } else { 0.0 }
}

/// Round to the fixed derived-column precision.
fn round_derived(value: f64) -> f64 {
    let scale = 10f64.powi(DERIVED_DECIMALS);
    (value * scale).round() / scale
}

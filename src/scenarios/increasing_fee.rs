// src/scenarios/increasing_fee.rs

use super::scenario_trait::{CurveScenario, ScenarioExtras, sigmoid, sigmoid_collateral};

/// Increasing taxation: the buy curve is the sell curve scaled by 1/(1 - t),
/// so the absolute fee per token grows as the price climbs while the tax
/// *rate* stays constant at t. Requires t in [0, 1).
pub struct IncreasingFeeScenario;

impl CurveScenario for IncreasingFeeScenario {
    fn buy_price(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a / (1.0 - extra.t), b, c)
    }

    fn sell_price(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b, c)
    }

    fn buy_collateral(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a / (1.0 - extra.t), b, c)
    }

    fn sell_collateral(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b, c)
    }

    fn description(&self) -> &'static str {
        "Increasing Taxation"
    }
}

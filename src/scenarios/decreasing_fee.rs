// src/scenarios/decreasing_fee.rs

use super::scenario_trait::{CurveScenario, ScenarioExtras, sigmoid, sigmoid_collateral};

/// Decreasing taxation: the buy curve's amplitude is reduced to (a - k/2) and
/// then shifted up by k, so the spread over the sell curve starts at k and
/// shrinks as supply grows. Requires k <= 2a so both curves meet without
/// crossing at the high-supply end.
pub struct DecreasingFeeScenario;

impl CurveScenario for DecreasingFeeScenario {
    fn buy_price(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a - extra.k / 2.0, b, c) + extra.k
    }

    fn sell_price(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b, c)
    }

    fn buy_collateral(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a - extra.k / 2.0, b, c) + extra.k + extra.k * x
    }

    fn sell_collateral(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b, c)
    }

    fn description(&self) -> &'static str {
        "Decreasing Taxation"
    }
}

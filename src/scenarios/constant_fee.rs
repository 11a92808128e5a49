// src/scenarios/constant_fee.rs

use super::scenario_trait::{CurveScenario, ScenarioExtras, sigmoid, sigmoid_collateral};

/// Constant taxation: the buy curve sits a fixed markup k above the sell
/// curve, so every purchased token is taxed by exactly k regardless of
/// supply. k >= 0 keeps the buy curve on top.
pub struct ConstantFeeScenario;

impl CurveScenario for ConstantFeeScenario {
    fn buy_price(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b, c) + extra.k
    }

    fn sell_price(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b, c)
    }

    fn buy_collateral(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b, c) + extra.k + extra.k * x
    }

    fn sell_collateral(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b, c)
    }

    fn description(&self) -> &'static str {
        "Constant Taxation"
    }
}

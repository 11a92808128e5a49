// src/scenarios/no_fee.rs

use super::scenario_trait::{CurveScenario, ScenarioExtras, sigmoid, sigmoid_collateral};

/// No taxation: the sell curve is the buy curve, so every unit of capital
/// swapped in stays in the collateral reserve. There is no separate sell
/// curve, so the sell collateral is identically zero.
pub struct NoFeeScenario;

impl CurveScenario for NoFeeScenario {
    fn buy_price(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b, c)
    }

    fn sell_price(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        self.buy_price(x, a, b, c, extra)
    }

    fn buy_collateral(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b, c)
    }

    fn sell_collateral(&self, _x: f64, _a: f64, _b: f64, _c: f64, _extra: &ScenarioExtras) -> f64 {
        0.0
    }

    fn description(&self) -> &'static str {
        "No Taxation"
    }
}

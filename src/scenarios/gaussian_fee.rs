// src/scenarios/gaussian_fee.rs

use super::scenario_trait::{CurveScenario, ScenarioExtras, sigmoid, sigmoid_collateral};

/// Bell-shaped taxation: buy and sell curves share amplitude and slope but
/// the sell curve is displaced h units to the right along the supply axis.
/// The spread between them rises and falls like a bell centered between the
/// two inflection points. h >= 0 keeps the buy curve on top everywhere.
pub struct GaussianFeeScenario;

impl CurveScenario for GaussianFeeScenario {
    fn buy_price(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b, c)
    }

    fn sell_price(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b + extra.h, c)
    }

    fn buy_collateral(&self, x: f64, a: f64, b: f64, c: f64, _extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b, c)
    }

    fn sell_collateral(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b + extra.h, c)
    }

    fn description(&self) -> &'static str {
        "Bell-Shaped Taxation"
    }
}

// src/scenarios/unconstrained.rs

use super::scenario_trait::{CurveScenario, ScenarioExtras, sigmoid, sigmoid_collateral};

/// No constraints: vertical displacement k on the buy side and horizontal
/// displacement h on the sell side are applied independently, with no policy
/// coupling between them. This is the only scenario where the buy and sell
/// curves may cross; keeping buy above sell is the caller's responsibility.
pub struct UnconstrainedScenario;

impl CurveScenario for UnconstrainedScenario {
    fn buy_price(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b, c) + extra.k
    }

    fn sell_price(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid(x, a, b + extra.h, c)
    }

    fn buy_collateral(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b, c) + extra.k + extra.k * x
    }

    fn sell_collateral(&self, x: f64, a: f64, b: f64, c: f64, extra: &ScenarioExtras) -> f64 {
        sigmoid_collateral(x, a, b + extra.h, c)
    }

    fn description(&self) -> &'static str {
        "No Constraints"
    }

    fn guarantees_buy_over_sell(&self) -> bool {
        false
    }
}

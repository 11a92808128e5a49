// src/agents/buy_policy.rs

use super::config::TRADE_SIZE;
use super::policy_trait::{AgentView, Policy};
use crate::shared_types::Action;

/// Accumulation policy: buy one token whenever it is affordable, otherwise
/// sell one.
pub struct BuyPolicy;

impl Policy for BuyPolicy {
    fn decide(&mut self, observed_price: f64, view: &AgentView) -> (Action, f64) {
        let cost = observed_price * TRADE_SIZE;
        if cost <= view.capital {
            (Action::Buy, TRADE_SIZE)
        } else {
            (Action::Sell, TRADE_SIZE)
        }
    }
}

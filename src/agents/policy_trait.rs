// src/agents/policy_trait.rs

use crate::shared_types::{Action, Transaction};

/// A read-only snapshot of the agent's own state given to a policy for
/// decision-making.
pub struct AgentView<'a> {
    pub capital: f64,
    pub tokens: f64,
    pub history: &'a [Transaction],
}

/// A trading policy: given the observed token price and the agent's state,
/// choose an action and a size in tokens.
pub trait Policy {
    fn decide(&mut self, observed_price: f64, view: &AgentView) -> (Action, f64);
}

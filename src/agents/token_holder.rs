// src/agents/token_holder.rs

use log::debug;

use super::policy_trait::{AgentView, Policy};
use crate::shared_types::{Action, AgentSnapshot, Transaction};

/// The single economic agent. Owns capital, a token balance, an append-only
/// transaction history and the decision policy driving it.
pub struct TokenHolder {
    capital: f64,
    tokens: f64,
    initial_capital: f64,
    initial_tokens: f64,
    transaction_history: Vec<Transaction>,
    policy: Box<dyn Policy>,
}

impl TokenHolder {
    pub fn new(tokens: f64, capital: f64, policy: Box<dyn Policy>) -> Self {
        Self {
            capital,
            tokens,
            initial_capital: capital,
            initial_tokens: tokens,
            transaction_history: Vec::new(),
            policy,
        }
    }

    /// Restores the initial balances and clears the history.
    pub fn reset(&mut self) {
        self.capital = self.initial_capital;
        self.tokens = self.initial_tokens;
        self.transaction_history.clear();
    }

    /// Asks the policy which transaction to attempt at the observed price.
    pub fn decide(&mut self, observed_price: f64) -> (Action, f64) {
        let view = AgentView {
            capital: self.capital,
            tokens: self.tokens,
            history: &self.transaction_history,
        };
        self.policy.decide(observed_price, &view)
    }

    /// Applies the results of an executed transaction and records it.
    ///
    /// Buys debit the gross amount plus the fee; sells credit the gross
    /// amount minus the fee. Capital is floor-clamped at zero. Returns the
    /// post-settlement (capital, tokens) pair.
    pub fn settle(&mut self, action: Action, tokens: f64, amount: f64, fee: f64) -> (f64, f64) {
        self.transaction_history.push(Transaction { action, tokens, amount, fee });

        match action {
            Action::Buy => {
                self.capital += -amount - fee;
                self.tokens += tokens;
            }
            Action::Sell => {
                self.capital += amount - fee;
                self.tokens -= tokens;
            }
        }
        self.capital = self.capital.max(0.0);

        debug!("settle: amount {amount} fee {fee} remaining capital {}", self.capital);
        (self.capital, self.tokens)
    }

    pub fn capital(&self) -> f64 {
        self.capital
    }

    pub fn tokens(&self) -> f64 {
        self.tokens
    }

    pub fn history(&self) -> &[Transaction] {
        &self.transaction_history
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot { capital: self.capital, tokens: self.tokens }
    }
}

// src/simulators/driver.rs

use log::info;

use crate::agents::token_holder::TokenHolder;
use crate::errors::SimulatorError;
use crate::market::Market;
use crate::shared_types::{Action, TimestepRecord, Transaction};

/// Steps one agent against one market, strictly sequentially: each step's
/// decision sees the state the previous step left behind. The recorded
/// history is the simulation's sole output artifact.
pub struct SimulationDriver {
    market: Market,
    agent: TokenHolder,
}

impl SimulationDriver {
    pub fn new(market: Market, agent: TokenHolder) -> Self {
        Self { market, agent }
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn agent(&self) -> &TokenHolder {
        &self.agent
    }

    /// Runs `steps` sequential transactions, returning the full history:
    /// a bootstrap record at timestep 0 followed by one record per step.
    ///
    /// Market and agent are reset before the first step. Any market failure
    /// aborts the run; no step is retried, skipped or reordered.
    pub fn run(&mut self, steps: u32) -> Result<Vec<TimestepRecord>, SimulatorError> {
        info!("running simulation for {steps} steps");
        self.market.reset();
        self.agent.reset();

        let mut history = Vec::with_capacity(steps as usize + 1);
        history.push(TimestepRecord {
            timestep: 0,
            token_price: self.market.buy_price()?,
            transaction: None,
            market: self.market.snapshot()?,
            agent: self.agent.snapshot(),
        });

        for step in 1..=steps {
            let observed_price = self.market.buy_price()?;
            let (action, size) = self.agent.decide(observed_price);

            let outcome = match action {
                Action::Buy => self.market.buy_tokens(size)?,
                Action::Sell => self.market.sell_tokens(size)?,
            };
            let executed = f64::from(outcome.tokens);
            self.agent.settle(action, executed, outcome.amount, outcome.fee);

            history.push(TimestepRecord {
                timestep: step,
                token_price: observed_price,
                transaction: Some(Transaction {
                    action,
                    tokens: executed,
                    amount: outcome.amount,
                    fee: outcome.fee,
                }),
                market: self.market.snapshot()?,
                agent: self.agent.snapshot(),
            });
        }

        Ok(history)
    }
}

/// Renders a run history as JSON for external consumers (tables, charts).
pub fn history_to_json(history: &[TimestepRecord]) -> serde_json::Result<String> {
    serde_json::to_string(history)
}

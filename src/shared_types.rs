// src/shared_types.rs

use serde::{Deserialize, Serialize};

/// The direction of a trade against the bonding curve.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum Action {
    Buy,
    Sell,
}

/// One executed transaction, as recorded in the agent's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub action: Action,
    /// Number of tokens actually executed (after clamping).
    pub tokens: f64,
    /// Gross amount of reserve currency moved.
    pub amount: f64,
    /// Transaction fee (the summed per-token tax).
    pub fee: f64,
}

/// Market-side state captured once per simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub tokens_circulation: u32,
    pub tokens_bought: u32,
    pub tokens_sold: u32,
    pub fund_balance: f64,
    pub collateral_balance: f64,
    pub buy_price: f64,
    pub sell_price: f64,
}

/// Agent-side state captured once per simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub capital: f64,
    pub tokens: f64,
}

/// One row of the simulation's output time series.
///
/// The first record of a run (timestep 0) captures the bootstrap state and
/// carries no transaction; every later record holds the transaction that was
/// executed during that step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestepRecord {
    pub timestep: u32,
    /// The buy price the agent observed when deciding.
    pub token_price: f64,
    pub transaction: Option<Transaction>,
    pub market: MarketSnapshot,
    pub agent: AgentSnapshot,
}

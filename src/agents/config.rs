// src/agents/config.rs

//! A centralized place for agent tuning parameters.

// --- TokenHolder ---
pub const DEFAULT_CAPITAL: f64 = 100_000.0;
pub const DEFAULT_TOKENS: f64 = 0.0;

// --- Fixed-size policies (Buy, Alternate) ---
pub const TRADE_SIZE: f64 = 1.0;

// --- RandomPolicy ---
// Sizes are drawn uniformly per decision; the seed makes a run repeatable.
pub const RANDOM_SIZE_MIN: u32 = 1;
pub const RANDOM_SIZE_MAX: u32 = 10;

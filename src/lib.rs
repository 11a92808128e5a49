// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod errors;
pub mod market;
pub mod pricing;
pub mod scenarios;
pub mod shared_types;
pub mod simulators;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `scenarios` ---
pub use scenarios::scenario_trait::{CurveScenario, ScenarioExtras};
pub use scenarios::scenario_type::ScenarioType;

// --- From `pricing` ---
pub use pricing::curve_config::CurveConfig;
pub use pricing::sigmoid_model::{BondingCurveModel, SigmoidCurve};
pub use pricing::table::{PricingRow, PricingTable};

// --- From our `market` engine ---
pub use market::{Market, MarketState, TradeOutcome};

// --- From `agents` ---
pub use agents::policy_trait::{AgentView, Policy};
pub use agents::policy_type::PolicyType;
pub use agents::token_holder::TokenHolder;

// --- From `simulators` ---
pub use simulators::driver::{SimulationDriver, history_to_json};

// --- From `shared_types` ---
pub use shared_types::{Action, AgentSnapshot, MarketSnapshot, TimestepRecord, Transaction};

// --- Errors ---
pub use errors::SimulatorError;

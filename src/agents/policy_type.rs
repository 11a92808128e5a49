// src/agents/policy_type.rs

use serde::{Deserialize, Serialize};

use super::alternate_policy::AlternatePolicy;
use super::buy_policy::BuyPolicy;
use super::policy_trait::Policy;
use super::random_policy::RandomPolicy;

/// Selector for the agent's decision policy. Configuration layers pick one
/// of these; the agent is constructed with the matching policy object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    Buy,
    Alternate,
    Random { seed: u64 },
}

impl PolicyType {
    pub fn policy(&self) -> Box<dyn Policy> {
        match self {
            PolicyType::Buy => Box::new(BuyPolicy),
            PolicyType::Alternate => Box::new(AlternatePolicy),
            PolicyType::Random { seed } => Box::new(RandomPolicy::new(*seed)),
        }
    }
}

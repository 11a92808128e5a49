// src/agents/random_policy.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{RANDOM_SIZE_MAX, RANDOM_SIZE_MIN};
use super::policy_trait::{AgentView, Policy};
use crate::shared_types::Action;

/// Noise-trader policy: a uniformly random size each step, buying while the
/// sized trade is affordable and selling otherwise. Seeded, so a run is
/// repeatable.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Policy for RandomPolicy {
    fn decide(&mut self, observed_price: f64, view: &AgentView) -> (Action, f64) {
        let size = f64::from(self.rng.gen_range(RANDOM_SIZE_MIN..=RANDOM_SIZE_MAX));
        if observed_price * size <= view.capital {
            (Action::Buy, size)
        } else {
            (Action::Sell, size)
        }
    }
}

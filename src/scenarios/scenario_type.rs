// src/scenarios/scenario_type.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constant_fee::ConstantFeeScenario;
use super::decreasing_fee::DecreasingFeeScenario;
use super::gaussian_fee::GaussianFeeScenario;
use super::increasing_fee::IncreasingFeeScenario;
use super::no_fee::NoFeeScenario;
use super::scenario_trait::CurveScenario;
use super::unconstrained::UnconstrainedScenario;
use crate::errors::SimulatorError;

/// Tag for the six taxation scenarios. External configuration layers pass the
/// short tags `s0`..`s5`; internally the tag is resolved to a scenario object
/// once, at table-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioType {
    NoFee,
    ConstantFee,
    DecreasingFee,
    IncreasingFee,
    GaussianFee,
    Unconstrained,
}

impl ScenarioType {
    /// Builds the scenario implementation for this tag.
    pub fn scenario(&self) -> Box<dyn CurveScenario> {
        match self {
            ScenarioType::NoFee => Box::new(NoFeeScenario),
            ScenarioType::ConstantFee => Box::new(ConstantFeeScenario),
            ScenarioType::DecreasingFee => Box::new(DecreasingFeeScenario),
            ScenarioType::IncreasingFee => Box::new(IncreasingFeeScenario),
            ScenarioType::GaussianFee => Box::new(GaussianFeeScenario),
            ScenarioType::Unconstrained => Box::new(UnconstrainedScenario),
        }
    }

    /// The short tag used by external configuration layers.
    pub fn tag(&self) -> &'static str {
        match self {
            ScenarioType::NoFee => "s0",
            ScenarioType::ConstantFee => "s1",
            ScenarioType::DecreasingFee => "s2",
            ScenarioType::IncreasingFee => "s3",
            ScenarioType::GaussianFee => "s4",
            ScenarioType::Unconstrained => "s5",
        }
    }

    /// All scenario tags, in tag order.
    pub fn all() -> [ScenarioType; 6] {
        [
            ScenarioType::NoFee,
            ScenarioType::ConstantFee,
            ScenarioType::DecreasingFee,
            ScenarioType::IncreasingFee,
            ScenarioType::GaussianFee,
            ScenarioType::Unconstrained,
        ]
    }
}

impl FromStr for ScenarioType {
    type Err = SimulatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s0" => Ok(ScenarioType::NoFee),
            "s1" => Ok(ScenarioType::ConstantFee),
            "s2" => Ok(ScenarioType::DecreasingFee),
            "s3" => Ok(ScenarioType::IncreasingFee),
            "s4" => Ok(ScenarioType::GaussianFee),
            "s5" => Ok(ScenarioType::Unconstrained),
            other => Err(SimulatorError::UnknownScenario(other.to_string())),
        }
    }
}

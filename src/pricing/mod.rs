// src/pricing/mod.rs

pub mod curve_config;
pub mod sigmoid_model;
pub mod table;

pub use curve_config::CurveConfig;
pub use sigmoid_model::{BondingCurveModel, SigmoidCurve};
pub use table::{PricingRow, PricingTable};

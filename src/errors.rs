// src/errors.rs

use thiserror::Error;

/// Everything that can go wrong inside the simulation core.
///
/// All variants are propagated to the caller; the only boundary condition
/// that is *not* an error is a trade clamped at the supply ceiling or floor,
/// which executes the clamped amount and returns normally.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// An unrecognized scenario tag was supplied (valid tags are `s0`..`s5`).
    #[error("unknown curve scenario `{0}`")]
    UnknownScenario(String),

    /// A curve parameter is outside its valid range.
    #[error("invalid curve configuration: {0}")]
    Configuration(String),

    /// A trading operation was attempted before a pricing table was built.
    #[error("bonding curve is not initialized, cannot execute transaction")]
    NotInitialized,

    /// The circulation index has moved past the end of the pricing table.
    #[error("circulation index {index} is outside the pricing table ({rows} rows)")]
    OutOfRange { index: usize, rows: usize },

    /// A pricing invariant that should hold by construction was violated.
    #[error("pricing invariant violated: {0}")]
    InvariantViolation(String),
}

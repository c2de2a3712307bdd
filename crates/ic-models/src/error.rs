//! Error types for interface composition models.

use ic_core::IcError;
use ic_thermo::ThermoError;
use thiserror::Error;

/// Result type for composition model operations.
pub type CompositionResult<T> = Result<T, CompositionError>;

/// Errors raised while selecting, constructing or evaluating closure laws.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompositionError {
    /// No model of this kind is registered under `name`.
    #[error("Unknown {kind} model type '{name}'. Valid types are: ({})", .valid.join(" "))]
    UnknownModelType {
        kind: &'static str,
        name: String,
        valid: Vec<String>,
    },

    /// Two models registered the same type name.
    #[error("Duplicate {kind} model type '{name}'")]
    DuplicateModelType { kind: &'static str, name: String },

    /// Species is not in the model's species list (or the phase composition).
    #[error("Unknown species '{species}' for phase '{phase}'")]
    UnknownSpecies { species: String, phase: String },

    /// The phase was asked for a composition it does not have.
    #[error("No multi-species composition available for phase '{phase}'")]
    NoCompositionAvailable { phase: String },

    /// `yf_prime` disagrees with the numerical derivative of `yf`.
    #[error(
        "Inconsistent linearization for '{species}' in cell {cell} at T = {temperature} K: \
         analytic {analytic}, numerical {numerical}"
    )]
    InconsistentLinearization {
        species: String,
        cell: usize,
        temperature: f64,
        analytic: f64,
        numerical: f64,
    },

    /// A query needed cached state but `update` was never called.
    #[error("Model '{model}' queried before update")]
    NotUpdated { model: &'static str },

    /// Missing or malformed configuration entry.
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },

    /// Model-internal iteration did not converge.
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Thermo error: {0}")]
    Thermo(ThermoError),

    #[error(transparent)]
    Core(#[from] IcError),
}

impl CompositionError {
    pub(crate) fn invalid_config(what: impl Into<String>) -> Self {
        CompositionError::InvalidConfig { what: what.into() }
    }
}

impl From<ThermoError> for CompositionError {
    fn from(e: ThermoError) -> Self {
        match e {
            ThermoError::UnknownSpecies { species, phase } => {
                CompositionError::UnknownSpecies { species, phase }
            }
            ThermoError::NoComposition { phase } => {
                CompositionError::NoCompositionAvailable { phase }
            }
            ThermoError::Core(err) => CompositionError::Core(err),
            other => CompositionError::Thermo(other),
        }
    }
}

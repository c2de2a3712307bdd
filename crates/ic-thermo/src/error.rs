//! Thermodynamic collaborator errors.

use ic_core::IcError;
use thiserror::Error;

/// Result type for thermo operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised by thermodynamic collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Species is not part of the named phase's composition.
    #[error("Unknown species '{species}' in phase '{phase}'")]
    UnknownSpecies { species: String, phase: String },

    /// The phase has no multi-species composition.
    #[error("Phase '{phase}' has no multi-species composition")]
    NoComposition { phase: String },

    /// The same species name appears twice in a species list.
    #[error("Duplicate species '{species}'")]
    DuplicateSpecies { species: String },

    /// Both sides of a pair refer to the same phase.
    #[error("Phase pair requires two distinct phases, got '{phase}' twice")]
    DuplicatePhase { phase: String },

    /// Non-physical values (negative density, mass fraction above one, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Core(#[from] IcError),
}

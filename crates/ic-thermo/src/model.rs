//! Thermodynamic collaborator traits and validation helpers.

use crate::error::{ThermoError, ThermoResult};
use crate::species::SpeciesTable;
use ic_core::{Real, ScalarField};

/// General thermodynamic model of one phase.
///
/// Implementations must be thread-safe (Send + Sync): several closure laws
/// may query the same phase concurrently. All fields returned have
/// `n_cells()` entries.
pub trait PhaseThermo: Send + Sync {
    /// Model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Number of cells of every field this model produces.
    fn n_cells(&self) -> usize;

    /// Pressure field [Pa].
    fn p(&self) -> &ScalarField;

    /// Bulk temperature field [K].
    fn t(&self) -> &ScalarField;

    /// Density field [kg/m³].
    fn rho(&self) -> &ScalarField;

    /// Mixture molar mass field [kg/kmol].
    fn molar_mass(&self) -> &ScalarField;

    /// Mixture specific enthalpy [J/kg] at the phase pressure and temperature `t`.
    fn he(&self, t: &ScalarField) -> ThermoResult<ScalarField>;

    /// Multi-species composition, if this phase has one.
    ///
    /// Default is `None` (single-component or unspeciated phase).
    fn composition(&self) -> Option<&dyn SpeciesMixture> {
        None
    }
}

/// Multi-species composition view of a phase.
pub trait SpeciesMixture: Send + Sync {
    /// Species declared by this composition.
    fn species(&self) -> &SpeciesTable;

    /// Current bulk mass fraction field of `species`.
    fn y(&self, species: &str) -> ThermoResult<&ScalarField>;

    /// Molar mass of `species` [kg/kmol].
    fn molar_mass(&self, species: &str) -> ThermoResult<Real>;

    /// Specific enthalpy of `species` [J/kg] at the phase pressure and temperature `t`.
    fn ha(&self, species: &str, t: &ScalarField) -> ThermoResult<ScalarField>;

    /// Thermal diffusivity for `species` [m²/s] at the current bulk state.
    fn thermal_diffusivity(&self, species: &str) -> ThermoResult<ScalarField>;
}

/// Validation helpers for thermo fields.
pub(crate) mod validation {
    use super::*;

    /// Ensure every cell is positive and finite.
    pub fn validate_positive(field: &ScalarField, what: &'static str) -> ThermoResult<()> {
        if field.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ThermoError::NonPhysical { what });
        }
        Ok(())
    }

    /// Ensure every cell is a mass fraction in [0, 1].
    pub fn validate_mass_fraction(field: &ScalarField, what: &'static str) -> ThermoResult<()> {
        if field
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0 || *v > 1.0)
        {
            return Err(ThermoError::NonPhysical { what });
        }
        Ok(())
    }

    /// Ensure a scalar is non-negative and finite.
    pub fn validate_non_negative(v: Real, what: &'static str) -> ThermoResult<()> {
        if !v.is_finite() || v < 0.0 {
            return Err(ThermoError::NonPhysical { what });
        }
        Ok(())
    }
}

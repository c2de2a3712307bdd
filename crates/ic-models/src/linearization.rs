//! Consistency check between `yf` and `yf_prime`.
//!
//! The outer solver linearizes the transfer rate through `yf_prime`; a
//! derivative that disagrees with `yf` stalls its iteration. This compares
//! the analytic derivative with a centered difference of `yf` evaluated
//! against the same cached state.

use crate::error::{CompositionError, CompositionResult};
use crate::model::InterfaceCompositionModel;
use ic_core::{Real, ScalarField, Tolerances, nearly_equal};
use tracing::debug;

/// Step and tolerances for the linearization check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearizationCheck {
    /// Temperature step of the centered difference [K]
    pub step: Real,
    /// Relative tolerance
    pub rel_tol: Real,
    /// Absolute tolerance, for derivatives near zero
    pub abs_tol: Real,
}

impl Default for LinearizationCheck {
    fn default() -> Self {
        Self {
            step: 1e-3,
            rel_tol: 1e-4,
            abs_tol: 1e-12,
        }
    }
}

impl LinearizationCheck {
    fn tolerances(&self) -> Tolerances {
        Tolerances {
            abs: self.abs_tol,
            rel: self.rel_tol,
        }
    }
}

/// Centered difference of `yf` for `species` at `tf`.
pub fn numerical_yf_prime(
    model: &dyn InterfaceCompositionModel,
    species: &str,
    tf: &ScalarField,
    step: Real,
) -> CompositionResult<ScalarField> {
    if !step.is_finite() || step <= 0.0 {
        return Err(CompositionError::invalid_config(format!(
            "finite difference step must be positive, got {step}"
        )));
    }
    let plus = model.yf(species, &tf.add_scalar(step))?;
    let minus = model.yf(species, &tf.add_scalar(-step))?;
    Ok((plus - minus) / (2.0 * step))
}

/// Check `yf_prime` of one species against the centered difference of `yf`.
///
/// Fails with [`CompositionError::InconsistentLinearization`] naming the
/// first cell outside tolerance.
pub fn check_linearization(
    model: &dyn InterfaceCompositionModel,
    species: &str,
    tf: &ScalarField,
    check: &LinearizationCheck,
) -> CompositionResult<()> {
    let analytic = model.yf_prime(species, tf)?;
    let numerical = numerical_yf_prime(model, species, tf, check.step)?;
    let tol = check.tolerances();

    let bad = analytic
        .iter()
        .zip(numerical.iter())
        .position(|(a, n)| !a.is_finite() || !nearly_equal(*a, *n, tol));
    if let Some(cell) = bad {
        return Err(CompositionError::InconsistentLinearization {
            species: species.to_string(),
            cell,
            temperature: tf[cell],
            analytic: analytic[cell],
            numerical: numerical[cell],
        });
    }
    debug!(
        model = model.type_name(),
        species,
        cells = tf.len(),
        "linearization consistent"
    );
    Ok(())
}

/// Run [`check_linearization`] for every listed species.
pub fn check_all_species(
    model: &dyn InterfaceCompositionModel,
    tf: &ScalarField,
    check: &LinearizationCheck,
) -> CompositionResult<()> {
    for species in model.species().iter() {
        check_linearization(model, species, tf, check)?;
    }
    Ok(())
}

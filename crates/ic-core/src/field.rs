//! Per-cell scalar fields.
//!
//! A field holds one value per discretization cell. Mesh topology and
//! decomposition live with the caller; here a field is just a dense vector
//! and every operation that combines fields checks their sizes first, so a
//! mismatch surfaces as an error instead of a panic inside nalgebra.

use crate::numeric::Real;
use crate::{IcError, IcResult};
use nalgebra::DVector;

/// Cell-centred scalar field.
pub type ScalarField = DVector<Real>;

/// Field with the same value in every cell.
pub fn uniform(n_cells: usize, value: Real) -> ScalarField {
    DVector::from_element(n_cells, value)
}

/// Field of zeros, typically an accumulator.
pub fn zeros(n_cells: usize) -> ScalarField {
    DVector::zeros(n_cells)
}

/// Ensure `field` has exactly `expected` cells.
pub fn ensure_len(field: &ScalarField, expected: usize, what: &'static str) -> IcResult<()> {
    if field.len() == expected {
        Ok(())
    } else {
        Err(IcError::FieldMismatch {
            what,
            expected,
            found: field.len(),
        })
    }
}

/// Ensure every cell of `field` is finite.
pub fn ensure_all_finite(field: &ScalarField, what: &'static str) -> IcResult<()> {
    match field.iter().find(|v| !v.is_finite()) {
        Some(&value) => Err(IcError::NonFinite { what, value }),
        None => Ok(()),
    }
}

/// Cellwise `max(field, floor)`.
pub fn clamp_min(field: &ScalarField, floor: Real) -> ScalarField {
    field.map(|v| v.max(floor))
}

/// Apply a fallible cellwise function, stopping at the first failure.
pub fn try_map<E>(
    field: &ScalarField,
    mut f: impl FnMut(Real) -> Result<Real, E>,
) -> Result<ScalarField, E> {
    let values = field.iter().map(|&v| f(v)).collect::<Result<Vec<_>, E>>()?;
    Ok(DVector::from_vec(values))
}

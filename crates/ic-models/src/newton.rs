//! Scalar Newton iteration for inverting saturation curves.

use crate::error::{CompositionError, CompositionResult};
use ic_core::Real;

/// Newton solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the step size
    pub abs_tol: Real,
    /// Relative tolerance on the step size
    pub rel_tol: Real,
    /// Step halvings allowed to keep the iterate positive
    pub max_backtracks: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-12,
            rel_tol: 1e-10,
            max_backtracks: 30,
        }
    }
}

/// Solve `f(x) = 0` from `x0`, keeping `x > 0`.
///
/// `f` returns the residual and its derivative. `what` names the equation in
/// the error returned when the iteration does not converge.
pub fn solve_positive<F>(
    x0: Real,
    f: F,
    config: &NewtonConfig,
    what: &str,
) -> CompositionResult<Real>
where
    F: Fn(Real) -> (Real, Real),
{
    let mut x = x0;
    for iter in 0..config.max_iterations {
        let (r, dr) = f(x);
        if !r.is_finite() || !dr.is_finite() || dr == 0.0 {
            return Err(CompositionError::ConvergenceFailed {
                what: format!("{what}: singular derivative at x = {x} (iteration {iter})"),
            });
        }

        let dx = -r / dr;
        let mut step = 1.0;
        let mut x_new = x + dx;
        for _ in 0..config.max_backtracks {
            if x_new > 0.0 {
                break;
            }
            step *= 0.5;
            x_new = x + step * dx;
        }
        if x_new <= 0.0 {
            return Err(CompositionError::ConvergenceFailed {
                what: format!("{what}: iterate left the positive range at iteration {iter}"),
            });
        }

        let converged = (x_new - x).abs() <= config.abs_tol + config.rel_tol * x_new.abs();
        x = x_new;
        if converged {
            return Ok(x);
        }
    }

    Err(CompositionError::ConvergenceFailed {
        what: format!(
            "{what}: maximum iterations {} reached at x = {x}",
            config.max_iterations
        ),
    })
}

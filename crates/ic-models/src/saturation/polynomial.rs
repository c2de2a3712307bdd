//! Saturation temperature as a polynomial in pressure:
//! `Tsat(p) = C0 + C1 p + C2 p^2 + ...`.

use super::{BoxedSaturation, SaturationModel, SaturationRegistry};
use crate::config::ConfigRecord;
use crate::error::{CompositionError, CompositionResult};
use crate::newton::{NewtonConfig, solve_positive};
use ic_core::{Real, ScalarField, try_map};

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Real>,
    p_initial: Real,
}

impl Polynomial {
    pub const TYPE_NAME: &'static str = "polynomial";

    pub const DEFAULT_P_INITIAL: Real = 1.0e5;

    /// Coefficients in ascending powers of pressure [Pa].
    pub fn new(coeffs: Vec<Real>) -> CompositionResult<Self> {
        Self::with_initial_pressure(coeffs, Self::DEFAULT_P_INITIAL)
    }

    /// As [`Polynomial::new`], starting the pressure inversion from `p_initial`.
    pub fn with_initial_pressure(coeffs: Vec<Real>, p_initial: Real) -> CompositionResult<Self> {
        if coeffs.is_empty() || coeffs.iter().any(|c| !c.is_finite()) {
            return Err(CompositionError::invalid_config(
                "polynomial coefficients must be a non-empty list of finite numbers",
            ));
        }
        if !p_initial.is_finite() || p_initial <= 0.0 {
            return Err(CompositionError::invalid_config(format!(
                "polynomial pInitial must be positive, got {p_initial}"
            )));
        }
        Ok(Self { coeffs, p_initial })
    }

    pub fn from_config(config: &ConfigRecord) -> CompositionResult<Self> {
        Self::with_initial_pressure(
            config.lookup("C")?,
            config.lookup_or("pInitial", Self::DEFAULT_P_INITIAL)?,
        )
    }

    pub fn coeffs(&self) -> &[Real] {
        &self.coeffs
    }

    fn t_of(&self, p: Real) -> Real {
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * p + c)
    }

    fn t_prime_of(&self, p: Real) -> Real {
        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (i, c)| acc * p + i as Real * c)
    }

    fn p_of(&self, t: Real, config: &NewtonConfig) -> CompositionResult<Real> {
        solve_positive(
            self.p_initial,
            |p| (self.t_of(p) - t, self.t_prime_of(p)),
            config,
            "polynomial saturation pressure",
        )
    }
}

impl SaturationModel for Polynomial {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        let config = NewtonConfig::default();
        try_map(t, |t| self.p_of(t, &config))
    }

    fn p_sat_prime(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        let config = NewtonConfig::default();
        try_map(t, |t| {
            let p = self.p_of(t, &config)?;
            Ok(1.0 / self.t_prime_of(p))
        })
    }

    fn t_sat(&self, p: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(p.map(|p| self.t_of(p)))
    }
}

fn construct(config: &ConfigRecord) -> CompositionResult<BoxedSaturation> {
    Ok(Box::new(Polynomial::from_config(config)?))
}

pub(super) fn register(registry: &mut SaturationRegistry) -> CompositionResult<()> {
    registry.register(Polynomial::TYPE_NAME, construct)
}

//! Arden Buck equation for the saturation pressure of water.

use super::{BoxedSaturation, SaturationModel, SaturationRegistry};
use crate::config::ConfigRecord;
use crate::error::CompositionResult;
use crate::newton::{NewtonConfig, solve_positive};
use ic_core::constants::ZERO_CELSIUS_K;
use ic_core::{Real, ScalarField, try_map};

const A: Real = 611.21;
const B: Real = 18.678;
const C: Real = 234.5;
const D: Real = 257.14;

/// `pSat = A exp(TC (B - TC/C) / (D + TC))` with `TC` in degrees Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArdenBuck;

impl ArdenBuck {
    pub const TYPE_NAME: &'static str = "ArdenBuck";

    const T_INITIAL: Real = 373.15;

    fn x_by_tc(tc: Real) -> Real {
        (B - tc / C) / (D + tc)
    }

    fn ln_p(t: Real) -> Real {
        let tc = t - ZERO_CELSIUS_K;
        A.ln() + tc * Self::x_by_tc(tc)
    }

    /// d(ln pSat)/dT.
    fn ln_p_prime(t: Real) -> Real {
        let tc = t - ZERO_CELSIUS_K;
        (D * Self::x_by_tc(tc) - tc / C) / (D + tc)
    }
}

impl SaturationModel for ArdenBuck {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(|t| {
            let tc = t - ZERO_CELSIUS_K;
            A * (tc * Self::x_by_tc(tc)).exp()
        }))
    }

    fn p_sat_prime(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        let p = self.p_sat(t)?;
        Ok(p.zip_map(t, |p, t| p * Self::ln_p_prime(t)))
    }

    fn ln_p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(Self::ln_p))
    }

    fn t_sat(&self, p: &ScalarField) -> CompositionResult<ScalarField> {
        let config = NewtonConfig::default();
        try_map(p, |p| {
            let target = p.ln();
            solve_positive(
                Self::T_INITIAL,
                |t| (Self::ln_p(t) - target, Self::ln_p_prime(t)),
                &config,
                "ArdenBuck saturation temperature",
            )
        })
    }
}

fn construct(_config: &ConfigRecord) -> CompositionResult<BoxedSaturation> {
    Ok(Box::new(ArdenBuck))
}

pub(super) fn register(registry: &mut SaturationRegistry) -> CompositionResult<()> {
    registry.register(ArdenBuck::TYPE_NAME, construct)
}

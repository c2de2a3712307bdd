//! Antoine equation: `ln(pSat) = A + B / (C + T)`.

use super::{BoxedSaturation, SaturationModel, SaturationRegistry, coefficient};
use crate::config::ConfigRecord;
use crate::error::CompositionResult;
use ic_core::{Real, ScalarField};

/// Antoine saturation curve with pressure in Pa and temperature in K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Antoine {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

impl Antoine {
    pub const TYPE_NAME: &'static str = "Antoine";

    pub fn new(a: Real, b: Real, c: Real) -> Self {
        Self { a, b, c }
    }

    pub fn from_config(config: &ConfigRecord) -> CompositionResult<Self> {
        Ok(Self::new(
            coefficient(config, "A")?,
            coefficient(config, "B")?,
            coefficient(config, "C")?,
        ))
    }

    fn ln_p(&self, t: Real) -> Real {
        self.a + self.b / (self.c + t)
    }
}

impl SaturationModel for Antoine {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(|t| self.ln_p(t).exp()))
    }

    fn p_sat_prime(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(|t| -self.ln_p(t).exp() * self.b / (self.c + t).powi(2)))
    }

    fn ln_p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(|t| self.ln_p(t)))
    }

    fn t_sat(&self, p: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(p.map(|p| self.b / (p.ln() - self.a) - self.c))
    }
}

fn construct(config: &ConfigRecord) -> CompositionResult<BoxedSaturation> {
    Ok(Box::new(Antoine::from_config(config)?))
}

pub(super) fn register(registry: &mut SaturationRegistry) -> CompositionResult<()> {
    registry.register(Antoine::TYPE_NAME, construct)
}

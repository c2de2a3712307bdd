//! Fixed saturation conditions, independent of temperature and pressure.

use super::{BoxedSaturation, SaturationModel, SaturationRegistry, coefficient};
use crate::config::ConfigRecord;
use crate::error::CompositionResult;
use ic_core::{
    Pressure, ScalarField, Temperature, ensure_positive, k, k_value, pa, pa_value, uniform, zeros,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSaturationConditions {
    p_sat: Pressure,
    t_sat: Temperature,
}

impl ConstantSaturationConditions {
    pub const TYPE_NAME: &'static str = "constantSaturationConditions";

    pub fn new(p_sat: Pressure, t_sat: Temperature) -> CompositionResult<Self> {
        ensure_positive(pa_value(p_sat), "saturation pressure")?;
        ensure_positive(k_value(t_sat), "saturation temperature")?;
        Ok(Self { p_sat, t_sat })
    }

    pub fn from_config(config: &ConfigRecord) -> CompositionResult<Self> {
        Self::new(
            pa(coefficient(config, "pSat")?),
            k(coefficient(config, "Tsat")?),
        )
    }
}

impl SaturationModel for ConstantSaturationConditions {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(uniform(t.len(), pa_value(self.p_sat)))
    }

    fn p_sat_prime(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(zeros(t.len()))
    }

    fn t_sat(&self, p: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(uniform(p.len(), k_value(self.t_sat)))
    }
}

fn construct(config: &ConfigRecord) -> CompositionResult<BoxedSaturation> {
    Ok(Box::new(ConstantSaturationConditions::from_config(config)?))
}

pub(super) fn register(registry: &mut SaturationRegistry) -> CompositionResult<()> {
    registry.register(ConstantSaturationConditions::TYPE_NAME, construct)
}

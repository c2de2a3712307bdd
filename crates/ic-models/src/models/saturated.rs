//! Saturated interface: the first listed species is at its saturation
//! pressure, the remaining listed species share what is left.
//!
//! ```text
//! Yf_sat = W_sat / W / p * pSat(Tf)
//! Yf_j   = Y_j (1 - Yf_sat) / max(1 - Y_sat, small)
//! ```

use crate::config::ConfigRecord;
use crate::error::CompositionResult;
use crate::model::{CompositionBase, InterfaceCompositionModel, warn_if_unbounded};
use crate::registry::{BoxedModel, ModelRegistry};
use crate::saturation::{BoxedSaturation, SaturationModel, construct_saturation};
use ic_core::{SMALL, ScalarField, clamp_min};
use ic_thermo::PhasePair;
use tracing::trace;

pub struct Saturated<'a> {
    base: CompositionBase<'a>,
    saturation: BoxedSaturation,
}

impl<'a> Saturated<'a> {
    pub const TYPE_NAME: &'static str = "Saturated";

    pub fn new(config: &ConfigRecord, pair: &'a PhasePair<'a>) -> CompositionResult<Self> {
        let base = CompositionBase::new(config, pair)?;
        let saturation = construct_saturation(&config.sub_dict("saturationPressure")?)?;
        Ok(Self::with_saturation(base, saturation))
    }

    pub fn with_saturation(base: CompositionBase<'a>, saturation: BoxedSaturation) -> Self {
        Self { base, saturation }
    }

    /// Name of the saturated species.
    pub fn saturated_species(&self) -> &str {
        // The species list is never empty.
        self.base.species().get(0).unwrap_or_default()
    }

    pub fn saturation(&self) -> &dyn SaturationModel {
        self.saturation.as_ref()
    }

    /// `W_sat / W / p`, converting saturation pressure to mass fraction.
    fn w_ratio_by_p(&self) -> CompositionResult<ScalarField> {
        let thermo = self.base.thermo();
        let w_sat = self
            .base
            .composition()
            .molar_mass(self.saturated_species())?;
        Ok(thermo
            .molar_mass()
            .map(|w| w_sat / w)
            .component_div(thermo.p()))
    }

    /// `max(1 - Y_sat, small)` from the bulk.
    fn non_saturated_bulk(&self) -> CompositionResult<ScalarField> {
        let y_sat = self.base.composition().y(self.saturated_species())?;
        Ok(clamp_min(&y_sat.map(|y| 1.0 - y), SMALL))
    }
}

impl InterfaceCompositionModel for Saturated<'_> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn base(&self) -> &CompositionBase<'_> {
        &self.base
    }

    fn yf(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let index = self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        let yf_sat = self
            .w_ratio_by_p()?
            .component_mul(&self.saturation.p_sat(tf)?);
        let yf = if index == 0 {
            yf_sat
        } else {
            let y = self.base.composition().y(species)?;
            y.component_mul(&yf_sat.map(|v| 1.0 - v))
                .component_div(&self.non_saturated_bulk()?)
        };
        warn_if_unbounded(Self::TYPE_NAME, species, &yf);
        Ok(yf)
    }

    fn yf_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let index = self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        let yf_sat_prime = self
            .w_ratio_by_p()?
            .component_mul(&self.saturation.p_sat_prime(tf)?);
        if index == 0 {
            return Ok(yf_sat_prime);
        }
        let y = self.base.composition().y(species)?;
        Ok(-y
            .component_mul(&yf_sat_prime)
            .component_div(&self.non_saturated_bulk()?))
    }

    fn update(&mut self, tf: &ScalarField) -> CompositionResult<()> {
        self.base.check_field(tf, "Tf")?;
        trace!(model = Self::TYPE_NAME, pair = %self.base.pair().name(), "update");
        Ok(())
    }
}

fn construct<'a>(
    _registry: &ModelRegistry,
    config: &ConfigRecord,
    pair: &'a PhasePair<'a>,
) -> CompositionResult<BoxedModel<'a>> {
    Ok(Box::new(Saturated::new(config, pair)?))
}

pub(super) fn register(registry: &mut ModelRegistry) -> CompositionResult<()> {
    registry.register(Saturated::TYPE_NAME, construct)
}

//! Henry's law for dilute dissolved species.
//!
//! ```text
//! Yf_i = k_i * Y_other,i * rho_other / rho
//! ```
//!
//! The solubility coefficients do not depend on temperature, so the
//! derivative is zero. `update` caches the solvent fraction `1 - ΣYf` that
//! non-transferring species share.

use crate::config::ConfigRecord;
use crate::error::{CompositionError, CompositionResult};
use crate::model::{CompositionBase, InterfaceCompositionModel, warn_if_unbounded};
use crate::registry::{BoxedModel, ModelRegistry};
use ic_core::{Real, ScalarField, zeros};
use ic_thermo::PhasePair;
use tracing::trace;

pub struct Henry<'a> {
    base: CompositionBase<'a>,
    k: Vec<Real>,
    y_solvent: Option<ScalarField>,
}

impl<'a> Henry<'a> {
    pub const TYPE_NAME: &'static str = "Henry";

    pub fn new(config: &ConfigRecord, pair: &'a PhasePair<'a>) -> CompositionResult<Self> {
        let base = CompositionBase::new(config, pair)?;
        let k: Vec<Real> = config.lookup("k")?;
        Self::with_solubilities(base, k)
    }

    /// Build from a base and one solubility per listed species, in list order.
    pub fn with_solubilities(base: CompositionBase<'a>, k: Vec<Real>) -> CompositionResult<Self> {
        if k.len() != base.species().len() {
            return Err(CompositionError::invalid_config(format!(
                "differing number of species ({}) and solubilities ({})",
                base.species().len(),
                k.len()
            )));
        }
        if let Some(bad) = k.iter().find(|k| !k.is_finite() || **k < 0.0) {
            return Err(CompositionError::invalid_config(format!(
                "solubility must be non-negative and finite, got {bad}"
            )));
        }

        base.other_composition_listing_species()?;

        Ok(Self {
            base,
            k,
            y_solvent: None,
        })
    }

    pub fn solubilities(&self) -> &[Real] {
        &self.k
    }

    fn solvent(&self) -> CompositionResult<&ScalarField> {
        self.y_solvent.as_ref().ok_or(CompositionError::NotUpdated {
            model: Self::TYPE_NAME,
        })
    }
}

impl InterfaceCompositionModel for Henry<'_> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn base(&self) -> &CompositionBase<'_> {
        &self.base
    }

    fn yf(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let index = self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        let y_other = self.base.other_composition()?.y(species)?;
        let rho_ratio = self
            .base
            .other_thermo()
            .rho()
            .component_div(self.base.thermo().rho());
        let yf = y_other.component_mul(&rho_ratio) * self.k[index];
        warn_if_unbounded(Self::TYPE_NAME, species, &yf);
        Ok(yf)
    }

    fn yf_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        Ok(zeros(tf.len()))
    }

    fn update(&mut self, tf: &ScalarField) -> CompositionResult<()> {
        self.base.check_field(tf, "Tf")?;
        let mut solvent = ScalarField::from_element(tf.len(), 1.0);
        for species in self.base.species().iter() {
            solvent -= self.yf(species, tf)?;
        }
        trace!(model = Self::TYPE_NAME, pair = %self.base.pair().name(), "update");
        self.y_solvent = Some(solvent);
        Ok(())
    }

    fn yf_inert(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        self.base.check_inert(species)?;
        self.base.check_field(tf, "Tf")?;
        let y = self.base.composition().y(species)?;
        Ok(y.component_mul(self.solvent()?))
    }

    fn yf_inert_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        self.base.check_inert(species)?;
        self.base.check_field(tf, "Tf")?;
        self.solvent()?;
        Ok(zeros(tf.len()))
    }
}

fn construct<'a>(
    _registry: &ModelRegistry,
    config: &ConfigRecord,
    pair: &'a PhasePair<'a>,
) -> CompositionResult<BoxedModel<'a>> {
    Ok(Box::new(Henry::new(config, pair)?))
}

pub(super) fn register(registry: &mut ModelRegistry) -> CompositionResult<()> {
    registry.register(Henry::TYPE_NAME, construct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use ic_core::uniform;
    use ic_thermo::FrozenMixture;

    // Water with dissolved oxygen and nitrogen.
    fn liquid() -> FrozenMixture {
        FrozenMixture::uniform(
            2,
            101_325.0,
            300.0,
            997.0,
            vec![(liquid_water(), 0.99), (oxygen(), 0.004), (nitrogen(), 0.006)],
        )
        .unwrap()
    }

    // Air.
    fn air() -> FrozenMixture {
        FrozenMixture::uniform(
            2,
            101_325.0,
            300.0,
            1.18,
            vec![(oxygen(), 0.23), (nitrogen(), 0.77)],
        )
        .unwrap()
    }

    const CONFIG: &str = "type: Henry\nspecies: [O2, N2]\nLe: 1.0\nk: [0.03, 0.015]";

    #[test]
    fn dissolved_fraction_scales_with_density_ratio() {
        let (liquid, air) = (liquid(), air());
        let pair = pair(("liquid", &liquid), ("gas", &air));
        let model = Henry::new(&record(CONFIG), &pair).unwrap();
        let tf = uniform(2, 300.0);
        let yf = model.yf("O2", &tf).unwrap();
        assert!((yf[0] - 0.03 * 0.23 * 1.18 / 997.0).abs() < 1e-15);
        assert_eq!(model.yf_prime("N2", &tf).unwrap(), zeros(2));
    }

    #[test]
    fn solvent_fraction_needs_update() {
        let (liquid, air) = (liquid(), air());
        let pair = pair(("liquid", &liquid), ("gas", &air));
        let mut model = Henry::new(&record(CONFIG), &pair).unwrap();
        let tf = uniform(2, 300.0);
        assert_eq!(
            model.yf_inert("H2O", &tf).unwrap_err(),
            CompositionError::NotUpdated { model: "Henry" }
        );

        model.update(&tf).unwrap();
        let solvent = 1.0 - model.yf("O2", &tf).unwrap()[0] - model.yf("N2", &tf).unwrap()[0];
        let yf_h2o = model.yf_inert("H2O", &tf).unwrap();
        assert!((yf_h2o[1] - 0.99 * solvent).abs() < 1e-15);
        assert_eq!(model.yf_inert_prime("H2O", &tf).unwrap(), zeros(2));
    }

    #[test]
    fn solubility_count_must_match() {
        let (liquid, air) = (liquid(), air());
        let pair = pair(("liquid", &liquid), ("gas", &air));
        let config = record("type: Henry\nspecies: [O2, N2]\nLe: 1.0\nk: [0.03]");
        assert!(matches!(
            Henry::new(&config, &pair),
            Err(CompositionError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn other_phase_needs_composition() {
        let liquid = liquid();
        let steam = ic_thermo::FrozenPure::uniform(2, 101_325.0, 300.0, 0.6, steam()).unwrap();
        let pair = pair(("liquid", &liquid), ("steam", &steam));
        let config = record("type: Henry\nspecies: [O2]\nLe: 1.0\nk: [0.03]");
        assert!(matches!(
            Henry::new(&config, &pair),
            Err(CompositionError::NoCompositionAvailable { .. })
        ));
    }

    #[test]
    fn other_phase_must_carry_species() {
        let gas = humid_gas(2, 0.01);
        let liquid = liquid();
        let pair = pair(("liquid", &liquid), ("gas", &gas));
        let config = record("type: Henry\nspecies: [O2]\nLe: 1.0\nk: [0.03]");
        match Henry::new(&config, &pair) {
            Err(CompositionError::UnknownSpecies { species, phase }) => {
                assert_eq!(species, "O2");
                assert_eq!(phase, "gas");
            }
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }
}

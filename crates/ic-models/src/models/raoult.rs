//! Raoult's law for ideal mixtures.
//!
//! Each transferring species carries its own nested closure law giving the
//! interface fraction over the pure species; the mixture value scales it with
//! the species' fraction on the other side:
//!
//! ```text
//! Yf_i = Y_other,i * Yf_pure,i
//! ```

use super::species_record;
use crate::config::ConfigRecord;
use crate::error::{CompositionError, CompositionResult};
use crate::model::{CompositionBase, InterfaceCompositionModel, warn_if_unbounded};
use crate::registry::{BoxedModel, ModelRegistry};
use ic_core::{ScalarField, zeros};
use ic_thermo::PhasePair;
use tracing::trace;

/// Cached after `update`: fraction left to the non-vapour species and its
/// temperature derivative.
struct NonVapour {
    y: ScalarField,
    y_prime: ScalarField,
}

pub struct Raoult<'a> {
    base: CompositionBase<'a>,
    species_models: Vec<BoxedModel<'a>>,
    non_vapour: Option<NonVapour>,
}

impl<'a> Raoult<'a> {
    pub const TYPE_NAME: &'static str = "Raoult";

    /// Build from `config`, resolving the nested models through `registry`.
    pub fn new(
        registry: &ModelRegistry,
        config: &ConfigRecord,
        pair: &'a PhasePair<'a>,
    ) -> CompositionResult<Self> {
        let base = CompositionBase::new(config, pair)?;
        let mut species_models = Vec::with_capacity(base.species().len());
        for species in base.species().iter() {
            let model = registry.construct(&species_record(config, species)?, pair)?;
            species_models.push(model);
        }
        Self::with_species_models(base, species_models)
    }

    /// Build from a base and one nested model per listed species, in list order.
    pub fn with_species_models(
        base: CompositionBase<'a>,
        species_models: Vec<BoxedModel<'a>>,
    ) -> CompositionResult<Self> {
        if species_models.len() != base.species().len() {
            return Err(CompositionError::invalid_config(format!(
                "Raoult needs one nested model per species, got {} for {}",
                species_models.len(),
                base.species()
            )));
        }
        for (species, model) in base.species().iter().zip(&species_models) {
            if !model.species().contains(species) {
                return Err(CompositionError::invalid_config(format!(
                    "nested {} model for '{species}' does not list it",
                    model.type_name()
                )));
            }
        }

        base.other_composition_listing_species()?;

        Ok(Self {
            base,
            species_models,
            non_vapour: None,
        })
    }

    /// Nested model for `species`.
    pub fn species_model(&self, species: &str) -> CompositionResult<&dyn InterfaceCompositionModel> {
        let index = self.base.species_index(species)?;
        Ok(self.species_models[index].as_ref())
    }

    fn non_vapour(&self) -> CompositionResult<&NonVapour> {
        self.non_vapour.as_ref().ok_or(CompositionError::NotUpdated {
            model: Self::TYPE_NAME,
        })
    }
}

impl InterfaceCompositionModel for Raoult<'_> {
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
        let yf = y_other.component_mul(&self.species_models[index].yf(species, tf)?);
        warn_if_unbounded(Self::TYPE_NAME, species, &yf);
        Ok(yf)
    }

    fn yf_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let index = self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        let y_other = self.base.other_composition()?.y(species)?;
        Ok(y_other.component_mul(&self.species_models[index].yf_prime(species, tf)?))
    }

    fn update(&mut self, tf: &ScalarField) -> CompositionResult<()> {
        self.base.check_field(tf, "Tf")?;
        for model in &mut self.species_models {
            model.update(tf)?;
        }

        let mut y = ScalarField::from_element(tf.len(), 1.0);
        let mut y_prime = zeros(tf.len());
        for species in self.base.species().iter() {
            y -= self.yf(species, tf)?;
            y_prime -= self.yf_prime(species, tf)?;
        }
        trace!(model = Self::TYPE_NAME, pair = %self.base.pair().name(), "update");
        self.non_vapour = Some(NonVapour { y, y_prime });
        Ok(())
    }

    fn yf_inert(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        self.base.check_inert(species)?;
        self.base.check_field(tf, "Tf")?;
        let y = self.base.composition().y(species)?;
        Ok(y.component_mul(&self.non_vapour()?.y))
    }

    fn yf_inert_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        self.base.check_inert(species)?;
        self.base.check_field(tf, "Tf")?;
        let y = self.base.composition().y(species)?;
        Ok(y.component_mul(&self.non_vapour()?.y_prime))
    }
}

fn construct<'a>(
    registry: &ModelRegistry,
    config: &ConfigRecord,
    pair: &'a PhasePair<'a>,
) -> CompositionResult<BoxedModel<'a>> {
    Ok(Box::new(Raoult::new(registry, config, pair)?))
}

pub(super) fn register(registry: &mut ModelRegistry) -> CompositionResult<()> {
    registry.register(Raoult::TYPE_NAME, construct)
}

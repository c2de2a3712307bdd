//! The interface composition contract.
//!
//! A closure law describes the composition of phase 1 of a [`PhasePair`] at
//! its interface with phase 2. Concrete laws implement two primitives,
//! [`yf`](InterfaceCompositionModel::yf) and
//! [`yf_prime`](InterfaceCompositionModel::yf_prime), plus
//! [`update`](InterfaceCompositionModel::update); everything else the outer
//! solver needs (driving difference, diffusivity, latent heat, the
//! latent-heat-weighted transfer rate) has a default built on those.
//!
//! # Lifecycle
//!
//! ```text
//! construct ──► Uninitialized ──update(Tf)──► Ready ──update(Tf')──► Ready
//! ```
//!
//! Queries are answered against the state cached by the last `update`.
//! Models with cached state fail with [`CompositionError::NotUpdated`] when
//! queried before the first `update`.
//!
//! # Borrowing
//!
//! A model borrows its phase pair and the thermo models behind it for `'a`
//! and never owns them; it cannot outlive the solver context that built the
//! pair.

use crate::config::ConfigRecord;
use crate::error::{CompositionError, CompositionResult};
use ic_core::{
    Ratio, Real, SMALL, ScalarField, clamp_min, ensure_len, ratio_value, unitless, zeros,
};
use ic_thermo::{PhasePair, PhaseThermo, SpeciesMixture, SpeciesTable, ThermoError};
use tracing::warn;

/// Data shared by every closure law: the pair, the transferring species and
/// the Lewis number, plus phase 1's composition resolved from the pair.
pub struct CompositionBase<'a> {
    pair: &'a PhasePair<'a>,
    species: SpeciesTable,
    lewis: Ratio,
    composition: &'a dyn SpeciesMixture,
}

impl<'a> CompositionBase<'a> {
    /// Read `species` and `Le` from `config` and resolve phase 1's composition.
    pub fn new(config: &ConfigRecord, pair: &'a PhasePair<'a>) -> CompositionResult<Self> {
        let names: Vec<String> = config.lookup("species")?;
        let species = SpeciesTable::new(names).map_err(|e| match e {
            ThermoError::DuplicateSpecies { species } => CompositionError::invalid_config(
                format!("duplicate species '{species}' in '{}/species'", config.name()),
            ),
            other => other.into(),
        })?;
        let le: Real = config.lookup("Le")?;
        if !le.is_finite() || le <= 0.0 {
            return Err(CompositionError::invalid_config(format!(
                "'{}/Le' must be positive and finite, got {le}",
                config.name()
            )));
        }
        Self::from_parts(pair, species, unitless(le))
    }

    /// Build from already-validated parts.
    pub fn from_parts(
        pair: &'a PhasePair<'a>,
        species: SpeciesTable,
        lewis: Ratio,
    ) -> CompositionResult<Self> {
        if species.is_empty() {
            return Err(CompositionError::invalid_config(
                "species list must not be empty",
            ));
        }
        let composition = pair.phase1().composition()?;
        if let Some(missing) = species
            .iter()
            .find(|name| !composition.species().contains(name))
        {
            return Err(CompositionError::UnknownSpecies {
                species: missing.to_string(),
                phase: pair.phase1().name().to_string(),
            });
        }
        Ok(Self {
            pair,
            species,
            lewis,
            composition,
        })
    }

    pub fn pair(&self) -> &'a PhasePair<'a> {
        self.pair
    }

    pub fn species(&self) -> &SpeciesTable {
        &self.species
    }

    pub fn lewis(&self) -> Ratio {
        self.lewis
    }

    pub fn thermo(&self) -> &'a dyn PhaseThermo {
        self.pair.phase1().thermo()
    }

    pub fn composition(&self) -> &'a dyn SpeciesMixture {
        self.composition
    }

    pub fn other_thermo(&self) -> &'a dyn PhaseThermo {
        self.pair.phase2().thermo()
    }

    pub fn other_has_composition(&self) -> bool {
        self.pair.phase2().has_composition()
    }

    /// Phase 2's composition; callers check `other_has_composition` first.
    pub fn other_composition(&self) -> CompositionResult<&'a dyn SpeciesMixture> {
        Ok(self.pair.phase2().composition()?)
    }

    /// Phase 2's composition, which must list every transferring species.
    pub fn other_composition_listing_species(&self) -> CompositionResult<&'a dyn SpeciesMixture> {
        let other = self.other_composition()?;
        if !self.species.is_subset_of(other.species()) {
            let missing = self
                .species
                .iter()
                .find(|s| !other.species().contains(s))
                .unwrap_or_default();
            return Err(CompositionError::UnknownSpecies {
                species: missing.to_string(),
                phase: self.pair.phase2().name().to_string(),
            });
        }
        Ok(other)
    }

    /// Position of `species` in the transferring-species list.
    pub fn species_index(&self, species: &str) -> CompositionResult<usize> {
        self.species
            .index(species)
            .ok_or_else(|| CompositionError::UnknownSpecies {
                species: species.to_string(),
                phase: self.pair.phase1().name().to_string(),
            })
    }

    /// Ensure `species` belongs to phase 1's composition but is not transferring.
    pub fn check_inert(&self, species: &str) -> CompositionResult<()> {
        if self.species.contains(species) || !self.composition.species().contains(species) {
            return Err(CompositionError::UnknownSpecies {
                species: species.to_string(),
                phase: self.pair.phase1().name().to_string(),
            });
        }
        Ok(())
    }

    /// Ensure `field` has phase 1's cell count.
    pub fn check_field(&self, field: &ScalarField, what: &'static str) -> CompositionResult<()> {
        Ok(ensure_len(field, self.thermo().n_cells(), what)?)
    }

    /// Denominator `max(1 − ΣY_transferring, small)` used to rescale inert species.
    pub fn inert_denominator(&self) -> CompositionResult<ScalarField> {
        let mut rest = ScalarField::from_element(self.thermo().n_cells(), 1.0);
        for name in self.species.iter() {
            rest -= self.composition.y(name)?;
        }
        Ok(clamp_min(&rest, SMALL))
    }
}

/// Interface composition closure law.
///
/// `Send + Sync` so that read-only queries against a completed `update` may
/// run concurrently.
pub trait InterfaceCompositionModel: Send + Sync {
    /// Registered type name.
    fn type_name(&self) -> &'static str;

    /// Shared data.
    fn base(&self) -> &CompositionBase<'_>;

    /// Interface mass fraction of `species` at interface temperature `tf`.
    fn yf(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField>;

    /// ∂Yf/∂T at `tf`.
    fn yf_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField>;

    /// Recompute cached state from the candidate interface temperature.
    fn update(&mut self, tf: &ScalarField) -> CompositionResult<()>;

    /// Mass fraction difference between the interface and the bulk.
    fn dy(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let base = self.base();
        base.check_field(tf, "Tf")?;
        let yf = self.yf(species, tf)?;
        let y = base.composition().y(species)?;
        Ok(yf - y)
    }

    /// Mass diffusivity [m²/s], thermal diffusivity over the Lewis number.
    fn diffusivity(&self, species: &str) -> CompositionResult<ScalarField> {
        let base = self.base();
        base.species_index(species)?;
        let alpha = base.composition().thermal_diffusivity(species)?;
        Ok(alpha / ratio_value(base.lewis()))
    }

    /// Latent heat [J/kg]: enthalpy on the other side minus enthalpy of
    /// `species` on this side, both at `tf`.
    fn latent_heat(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let base = self.base();
        base.species_index(species)?;
        base.check_field(tf, "Tf")?;
        let h_this = base.composition().ha(species, tf)?;
        let h_other = match base.other_thermo().composition() {
            Some(other) if other.species().contains(species) => other.ha(species, tf)?,
            _ => base.other_thermo().he(tf)?,
        };
        Ok(h_other - h_this)
    }

    /// Add this model's latent-heat-weighted transfer rate to the totals.
    ///
    /// For each transferring species:
    ///
    /// ```text
    /// dmdt_l       += K * dY * L
    /// dmdt_l_prime += K * YfPrime * L
    /// ```
    ///
    /// Linearized through `yf_prime` only, not through the temperature
    /// dependence of `L`. Callers zero the accumulators before the first
    /// model of a summation. On error the accumulators are left untouched.
    fn add_dmdt_l(
        &self,
        k: &ScalarField,
        tf: &ScalarField,
        dmdt_l: &mut ScalarField,
        dmdt_l_prime: &mut ScalarField,
    ) -> CompositionResult<()> {
        let base = self.base();
        base.check_field(k, "K")?;
        base.check_field(tf, "Tf")?;
        base.check_field(dmdt_l, "dmdtL")?;
        base.check_field(dmdt_l_prime, "dmdtLPrime")?;

        let mut sum = zeros(tf.len());
        let mut sum_prime = zeros(tf.len());
        for species in base.species().iter() {
            let kl = k.component_mul(&self.latent_heat(species, tf)?);
            sum += kl.component_mul(&self.dy(species, tf)?);
            sum_prime += kl.component_mul(&self.yf_prime(species, tf)?);
        }
        *dmdt_l += sum;
        *dmdt_l_prime += sum_prime;
        Ok(())
    }

    /// Interface mass fraction of a non-transferring species of phase 1.
    ///
    /// Default rescales the bulk fraction onto what the transferring species
    /// leave: `Y·(1 − ΣYf) / max(1 − ΣY, small)`.
    fn yf_inert(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let base = self.base();
        base.check_inert(species)?;
        base.check_field(tf, "Tf")?;
        let mut rest = ScalarField::from_element(tf.len(), 1.0);
        for name in base.species().iter() {
            rest -= self.yf(name, tf)?;
        }
        let y = base.composition().y(species)?;
        Ok(y.component_mul(&rest)
            .component_div(&base.inert_denominator()?))
    }

    /// ∂/∂T of [`yf_inert`](InterfaceCompositionModel::yf_inert).
    fn yf_inert_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let base = self.base();
        base.check_inert(species)?;
        base.check_field(tf, "Tf")?;
        let mut sum_prime = zeros(tf.len());
        for name in base.species().iter() {
            sum_prime += self.yf_prime(name, tf)?;
        }
        let y = base.composition().y(species)?;
        Ok(-y
            .component_mul(&sum_prime)
            .component_div(&base.inert_denominator()?))
    }

    fn pair(&self) -> &PhasePair<'_> {
        self.base().pair()
    }

    fn species(&self) -> &SpeciesTable {
        self.base().species()
    }

    fn thermo(&self) -> &dyn PhaseThermo {
        self.base().thermo()
    }

    fn composition(&self) -> &dyn SpeciesMixture {
        self.base().composition()
    }

    fn other_thermo(&self) -> &dyn PhaseThermo {
        self.base().other_thermo()
    }

    fn other_has_composition(&self) -> bool {
        self.base().other_has_composition()
    }

    fn other_composition(&self) -> CompositionResult<&dyn SpeciesMixture> {
        self.base().other_composition()
    }
}

/// Log cells where a computed interface fraction leaves [0, 1].
pub(crate) fn warn_if_unbounded(model: &'static str, species: &str, yf: &ScalarField) {
    let outside = yf.iter().filter(|y| **y < 0.0 || **y > 1.0).count();
    if outside > 0 {
        warn!(
            model,
            species,
            cells = outside,
            "interface mass fraction outside [0, 1]"
        );
    }
}

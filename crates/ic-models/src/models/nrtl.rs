//! Non-random two-liquid (NRTL) activity model for a binary mixture.
//!
//! Raoult's law corrected for non-ideal mixing in the other phase. Each of
//! the two species has a nested closure law for its pure-species interface
//! fraction, and the NRTL activity coefficient of the species in phase 2
//! scales it:
//!
//! ```text
//! Yf_i = Y_other,i * gamma_i * Yf_pure,i
//!
//! alpha_ij = alpha + beta Tf
//! tau_ij   = a + b / Tf
//! G_ij     = exp(-alpha_ij tau_ij)
//!
//! ln gamma_1 = X2² (tau21 G21² / (X1 + X2 G21)² + tau12 G12 / (X2 + X1 G12)²)
//! ln gamma_2 = X1² (tau12 G12² / (X2 + X1 G12)² + tau21 G21 / (X1 + X2 G21)²)
//! ```
//!
//! `X` are the phase-2 mole fractions. Coefficients are read from each
//! species' own record. The activity coefficients are computed by `update`
//! and held fixed until the next one, so
//! `yf_prime = Y_other * gamma * yf_prime_pure`.

use super::species_record;
use crate::config::ConfigRecord;
use crate::error::{CompositionError, CompositionResult};
use crate::model::{CompositionBase, InterfaceCompositionModel, warn_if_unbounded};
use crate::registry::{BoxedModel, ModelRegistry};
use ic_core::{Real, SMALL, ScalarField, ensure_all_finite};
use ic_thermo::PhasePair;
use tracing::trace;

/// NRTL interaction coefficients of one species with the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NrtlCoefficients {
    pub alpha: Real,
    /// [1/K]
    pub beta: Real,
    pub a: Real,
    /// [K]
    pub b: Real,
}

impl NrtlCoefficients {
    pub fn from_config(config: &ConfigRecord) -> CompositionResult<Self> {
        let coeffs = Self {
            alpha: config.lookup("alpha")?,
            beta: config.lookup_or("beta", 0.0)?,
            a: config.lookup("a")?,
            b: config.lookup_or("b", 0.0)?,
        };
        if [coeffs.alpha, coeffs.beta, coeffs.a, coeffs.b]
            .iter()
            .any(|c| !c.is_finite())
        {
            return Err(CompositionError::invalid_config(format!(
                "NRTL coefficients in '{}' must be finite",
                config.name()
            )));
        }
        Ok(coeffs)
    }

    /// Non-randomness `alpha + beta T`.
    fn alpha(&self, t: Real) -> Real {
        self.alpha + self.beta * t
    }

    /// Interaction parameter `a + b / T`.
    fn tau(&self, t: Real) -> Real {
        self.a + self.b / t
    }
}

pub struct NonRandomTwoLiquid<'a> {
    base: CompositionBase<'a>,
    coeffs: [NrtlCoefficients; 2],
    species_models: Vec<BoxedModel<'a>>,
    gamma: Option<[ScalarField; 2]>,
}

impl<'a> NonRandomTwoLiquid<'a> {
    pub const TYPE_NAME: &'static str = "nonRandomTwoLiquid";

    /// Build from `config`, resolving the nested models through `registry`.
    pub fn new(
        registry: &ModelRegistry,
        config: &ConfigRecord,
        pair: &'a PhasePair<'a>,
    ) -> CompositionResult<Self> {
        let base = CompositionBase::new(config, pair)?;
        if base.species().len() != 2 {
            return Err(CompositionError::invalid_config(format!(
                "{} requires exactly two species, got {}",
                Self::TYPE_NAME,
                base.species()
            )));
        }
        base.other_composition_listing_species()?;

        let mut coeffs = Vec::with_capacity(2);
        let mut species_models = Vec::with_capacity(2);
        for species in base.species().iter() {
            let record = species_record(config, species)?;
            coeffs.push(NrtlCoefficients::from_config(&record)?);
            species_models.push(registry.construct(&record, pair)?);
        }
        Ok(Self {
            base,
            coeffs: [coeffs[0], coeffs[1]],
            species_models,
            gamma: None,
        })
    }

    pub fn coefficients(&self) -> &[NrtlCoefficients; 2] {
        &self.coeffs
    }

    /// Activity coefficients from the last `update`.
    pub fn gamma(&self) -> CompositionResult<&[ScalarField; 2]> {
        self.gamma.as_ref().ok_or(CompositionError::NotUpdated {
            model: Self::TYPE_NAME,
        })
    }

    /// Phase-2 mole fraction `Y_i W / W_i` of listed species `index`.
    fn mole_fraction(&self, index: usize) -> CompositionResult<ScalarField> {
        let species = self.base.species().get(index).unwrap_or_default();
        let other = self.base.other_composition()?;
        let w_i = other.molar_mass(species)?;
        Ok(other
            .y(species)?
            .component_mul(self.base.other_thermo().molar_mass())
            / w_i)
    }

    fn activity(&self, tf: &ScalarField) -> CompositionResult<[ScalarField; 2]> {
        let x1 = self.mole_fraction(0)?;
        let x2 = self.mole_fraction(1)?;
        let [c12, c21] = self.coeffs;

        let n = tf.len();
        let mut gamma1 = Vec::with_capacity(n);
        let mut gamma2 = Vec::with_capacity(n);
        for cell in 0..n {
            let (t, x1, x2) = (tf[cell], x1[cell], x2[cell]);
            let tau12 = c12.tau(t);
            let tau21 = c21.tau(t);
            let g12 = (-c12.alpha(t) * tau12).exp();
            let g21 = (-c21.alpha(t) * tau21).exp();
            let d1 = (x1 + x2 * g21).powi(2).max(SMALL);
            let d2 = (x2 + x1 * g12).powi(2).max(SMALL);
            gamma1.push((x2 * x2 * (tau21 * g21 * g21 / d1 + tau12 * g12 / d2)).exp());
            gamma2.push((x1 * x1 * (tau12 * g12 * g12 / d2 + tau21 * g21 / d1)).exp());
        }
        Ok([ScalarField::from_vec(gamma1), ScalarField::from_vec(gamma2)])
    }
}

impl InterfaceCompositionModel for NonRandomTwoLiquid<'_> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn base(&self) -> &CompositionBase<'_> {
        &self.base
    }

    fn yf(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let index = self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        let gamma = &self.gamma()?[index];
        let y_other = self.base.other_composition()?.y(species)?;
        let yf = y_other
            .component_mul(gamma)
            .component_mul(&self.species_models[index].yf(species, tf)?);
        warn_if_unbounded(Self::TYPE_NAME, species, &yf);
        Ok(yf)
    }

    fn yf_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        let index = self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        let gamma = &self.gamma()?[index];
        let y_other = self.base.other_composition()?.y(species)?;
        Ok(y_other
            .component_mul(gamma)
            .component_mul(&self.species_models[index].yf_prime(species, tf)?))
    }

    fn update(&mut self, tf: &ScalarField) -> CompositionResult<()> {
        self.base.check_field(tf, "Tf")?;
        for model in &mut self.species_models {
            model.update(tf)?;
        }
        let gamma = self.activity(tf)?;
        ensure_all_finite(&gamma[0], "NRTL activity coefficient")?;
        ensure_all_finite(&gamma[1], "NRTL activity coefficient")?;
        trace!(
            model = Self::TYPE_NAME,
            pair = %self.base.pair().name(),
            gamma1_max = gamma[0].max(),
            gamma2_max = gamma[1].max(),
            "update"
        );
        self.gamma = Some(gamma);
        Ok(())
    }
}

fn construct<'a>(
    registry: &ModelRegistry,
    config: &ConfigRecord,
    pair: &'a PhasePair<'a>,
) -> CompositionResult<BoxedModel<'a>> {
    Ok(Box::new(NonRandomTwoLiquid::new(registry, config, pair)?))
}

pub(super) fn register(registry: &mut ModelRegistry) -> CompositionResult<()> {
    registry.register(NonRandomTwoLiquid::TYPE_NAME, construct)
}

//! Shared fixtures for ic-models integration tests.
#![allow(dead_code)]

use ic_core::{Real, ScalarField, uniform, unitless};
use ic_models::{
    BoxedModel, CompositionBase, CompositionResult, ConfigRecord, InterfaceCompositionModel,
    ModelRegistry,
};
use ic_thermo::{FrozenMixture, FrozenPure, FrozenSpecies, PhasePair, SpeciesTable};

pub fn steam() -> FrozenSpecies {
    FrozenSpecies::new("H2O", 18.015, 1900.0, 2.5e6, 373.15, 2.0e-5)
}

pub fn ethanol_vapour() -> FrozenSpecies {
    FrozenSpecies::new("C2H5OH", 46.07, 1420.0, 8.5e5, 351.4, 1.1e-5)
}

pub fn nitrogen() -> FrozenSpecies {
    FrozenSpecies::new("N2", 28.014, 1040.0, 0.0, 298.15, 2.2e-5)
}

pub fn liquid_water() -> FrozenSpecies {
    FrozenSpecies::new("H2O", 18.015, 4180.0, 4.2e5, 373.15, 1.6e-7)
}

pub fn liquid_ethanol() -> FrozenSpecies {
    FrozenSpecies::new("C2H5OH", 46.07, 2440.0, 0.0, 298.15, 9.0e-8)
}

/// Nitrogen carrying water and ethanol vapour.
pub fn gas(n_cells: usize, y_h2o: Real, y_ethanol: Real) -> FrozenMixture {
    FrozenMixture::uniform(
        n_cells,
        101_325.0,
        350.0,
        1.1,
        vec![
            (steam(), y_h2o),
            (ethanol_vapour(), y_ethanol),
            (nitrogen(), 1.0 - y_h2o - y_ethanol),
        ],
    )
    .unwrap()
}

/// Water/ethanol liquid mixture.
pub fn liquid_mixture(n_cells: usize, y_h2o: Real) -> FrozenMixture {
    FrozenMixture::uniform(
        n_cells,
        101_325.0,
        340.0,
        900.0,
        vec![(liquid_water(), y_h2o), (liquid_ethanol(), 1.0 - y_h2o)],
    )
    .unwrap()
}

pub fn pure_water(n_cells: usize) -> FrozenPure {
    FrozenPure::uniform(n_cells, 101_325.0, 350.0, 970.0, liquid_water()).unwrap()
}

pub fn record(text: &str) -> ConfigRecord {
    ConfigRecord::from_yaml_str("interfaceComposition", text).unwrap()
}

/// Valid configuration for each built-in closure law, for a gas phase 1 and a
/// water/ethanol liquid phase 2.
pub fn builtin_configs() -> Vec<(&'static str, ConfigRecord)> {
    vec![
        (
            "Saturated",
            record(
                "
type: Saturated
species: [H2O]
Le: 1.0
saturationPressure:
  type: ArdenBuck
",
            ),
        ),
        (
            "Henry",
            record("type: Henry\nspecies: [H2O, C2H5OH]\nLe: 0.9\nk: [1.0e-4, 2.0e-4]"),
        ),
        (
            "Raoult",
            record(
                "
type: Raoult
species: [H2O, C2H5OH]
Le: 1.0
H2O:
  type: Saturated
  saturationPressure:
    type: ArdenBuck
C2H5OH:
  type: Saturated
  saturationPressure:
    type: Antoine
    A: 23.80
    B: -3803.98
    C: -41.68
",
            ),
        ),
        (
            "nonRandomTwoLiquid",
            record(
                "
type: nonRandomTwoLiquid
species: [H2O, C2H5OH]
Le: 1.0
H2O:
  type: Saturated
  saturationPressure:
    type: ArdenBuck
  alpha: 0.3
  beta: 1.0e-4
  a: 0.8
  b: 120.0
C2H5OH:
  type: Saturated
  saturationPressure:
    type: AntoineExtended
    A: 23.80
    B: -3803.98
    C: -41.68
    D: 0.0
    E: 0.0
    F: 1.0
  alpha: 0.3
  a: -0.4
  b: 310.0
",
            ),
        ),
    ]
}

/// Closure law with a fixed interface fraction and derivative.
pub struct FixedFraction<'a> {
    base: CompositionBase<'a>,
    yf: Real,
    yf_prime: Real,
}

impl<'a> FixedFraction<'a> {
    pub fn new(pair: &'a PhasePair<'a>, species: &[&str], le: Real, yf: Real, yf_prime: Real) -> Self {
        let base = CompositionBase::from_parts(
            pair,
            SpeciesTable::new(species.iter().copied()).unwrap(),
            unitless(le),
        )
        .unwrap();
        Self { base, yf, yf_prime }
    }

    pub const TYPE_NAME: &'static str = "fixedFraction";
}

/// Registry constructor for [`FixedFraction`], reading `Yf` and an optional
/// `YfPrime`.
pub fn construct_fixed_fraction<'a>(
    _registry: &ModelRegistry,
    config: &ConfigRecord,
    pair: &'a PhasePair<'a>,
) -> CompositionResult<BoxedModel<'a>> {
    Ok(Box::new(FixedFraction {
        base: CompositionBase::new(config, pair)?,
        yf: config.lookup("Yf")?,
        yf_prime: config.lookup_or("YfPrime", 0.0)?,
    }))
}

impl InterfaceCompositionModel for FixedFraction<'_> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn base(&self) -> &CompositionBase<'_> {
        &self.base
    }

    fn yf(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        Ok(uniform(tf.len(), self.yf))
    }

    fn yf_prime(&self, species: &str, tf: &ScalarField) -> CompositionResult<ScalarField> {
        self.base.species_index(species)?;
        self.base.check_field(tf, "Tf")?;
        Ok(uniform(tf.len(), self.yf_prime))
    }

    fn update(&mut self, tf: &ScalarField) -> CompositionResult<()> {
        self.base.check_field(tf, "Tf")
    }
}

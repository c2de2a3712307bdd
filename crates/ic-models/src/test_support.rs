//! Frozen-property fixtures shared by the unit tests.

use crate::config::ConfigRecord;
use ic_thermo::{FrozenMixture, FrozenPure, FrozenSpecies, Phase, PhasePair, PhaseThermo};

pub(crate) fn steam() -> FrozenSpecies {
    FrozenSpecies::new("H2O", 18.015, 1900.0, 2.5e6, 373.15, 2.0e-5)
}

pub(crate) fn nitrogen() -> FrozenSpecies {
    FrozenSpecies::new("N2", 28.014, 1040.0, 0.0, 298.15, 2.2e-5)
}

pub(crate) fn oxygen() -> FrozenSpecies {
    FrozenSpecies::new("O2", 31.998, 920.0, 0.0, 298.15, 2.1e-5)
}

pub(crate) fn liquid_water() -> FrozenSpecies {
    FrozenSpecies::new("H2O", 18.015, 4180.0, 4.2e5, 373.15, 1.6e-7)
}

pub(crate) fn liquid_ethanol() -> FrozenSpecies {
    FrozenSpecies::new("C2H5OH", 46.07, 2440.0, 0.0, 298.15, 9.0e-8)
}

/// Humid nitrogen at one atmosphere.
pub(crate) fn humid_gas(n_cells: usize, y_h2o: f64) -> FrozenMixture {
    FrozenMixture::uniform(
        n_cells,
        101_325.0,
        350.0,
        1.0,
        vec![(steam(), y_h2o), (nitrogen(), 1.0 - y_h2o)],
    )
    .unwrap()
}

/// Water/ethanol liquid.
pub(crate) fn water_ethanol(n_cells: usize, y_h2o: f64) -> FrozenMixture {
    FrozenMixture::uniform(
        n_cells,
        101_325.0,
        330.0,
        900.0,
        vec![(liquid_water(), y_h2o), (liquid_ethanol(), 1.0 - y_h2o)],
    )
    .unwrap()
}

pub(crate) fn water(n_cells: usize) -> FrozenPure {
    FrozenPure::uniform(n_cells, 101_325.0, 350.0, 970.0, liquid_water()).unwrap()
}

pub(crate) fn pair<'a>(
    this: (&'a str, &'a dyn PhaseThermo),
    other: (&'a str, &'a dyn PhaseThermo),
) -> PhasePair<'a> {
    PhasePair::new(Phase::new(this.0, this.1), Phase::new(other.0, other.1)).unwrap()
}

pub(crate) fn record(text: &str) -> ConfigRecord {
    ConfigRecord::from_yaml_str("interfaceComposition", text).unwrap()
}

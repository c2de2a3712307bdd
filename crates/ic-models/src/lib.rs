//! ic-models: interface composition closure laws.
//!
//! Provides:
//! - The `InterfaceCompositionModel` contract and its shared `CompositionBase`
//! - Name-keyed registries for closure laws and saturation-pressure models
//! - Built-in laws: `Saturated`, `Henry`, `Raoult`, `nonRandomTwoLiquid`
//! - Saturation curves: `Antoine`, `AntoineExtended`, `ArdenBuck`,
//!   `polynomial`, `constantSaturationConditions`
//! - A linearization check of `yf_prime` against `yf`
//! - Parallel temperature sweeps
//!
//! # Example
//!
//! ```
//! use ic_core::uniform;
//! use ic_models::{ConfigRecord, InterfaceCompositionModel, construct};
//! use ic_thermo::{FrozenMixture, FrozenPure, FrozenSpecies, Phase, PhasePair};
//!
//! let steam = FrozenSpecies::new("H2O", 18.015, 1900.0, 2.5e6, 373.15, 2.0e-5);
//! let air = FrozenSpecies::new("N2", 28.014, 1040.0, 0.0, 298.15, 2.2e-5);
//! let gas = FrozenMixture::uniform(1, 101_325.0, 350.0, 1.0, vec![(steam, 0.01), (air, 0.99)])?;
//! let water = FrozenPure::uniform(
//!     1,
//!     101_325.0,
//!     350.0,
//!     970.0,
//!     FrozenSpecies::new("H2O", 18.015, 4180.0, 4.2e5, 373.15, 1.6e-7),
//! )?;
//! let pair = PhasePair::new(Phase::new("gas", &gas), Phase::new("liquid", &water))?;
//!
//! let config = ConfigRecord::from_yaml_str(
//!     "interfaceComposition",
//!     "
//! type: Saturated
//! species: [H2O]
//! Le: 1.0
//! saturationPressure:
//!   type: ArdenBuck
//! ",
//! )?;
//! let mut model = construct(&config, &pair)?;
//!
//! let tf = uniform(1, 330.0);
//! model.update(&tf)?;
//! let dy = model.dy("H2O", &tf)?;
//! assert!(dy[0] > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod linearization;
pub mod model;
pub mod models;
pub mod newton;
pub mod registry;
pub mod saturation;
pub mod sweep;

#[cfg(test)]
mod test_support;

// Re-exports for ergonomics
pub use config::ConfigRecord;
pub use error::{CompositionError, CompositionResult};
pub use linearization::{LinearizationCheck, check_all_species, check_linearization};
pub use model::{CompositionBase, InterfaceCompositionModel};
pub use registry::{BoxedModel, ModelConstructor, ModelRegistry, Registry, construct, models};
pub use saturation::{SaturationModel, construct_saturation, saturation_models};
pub use sweep::{SweepPoint, SweepSpacing, TemperatureSweep, evaluate_sweep};

//! ic-thermo: thermodynamic collaborators for interface composition models.
//!
//! Provides:
//! - Ordered species tables (transferring-species lists, mixture species)
//! - `PhaseThermo` / `SpeciesMixture` traits consumed by closure laws
//! - `Phase` and `PhasePair` (ordered "this side" / "other side" roles)
//! - Frozen-property (constant cp) mixtures for tests and case files
//!
//! # Architecture
//!
//! Closure laws never own thermodynamic state. They borrow a `PhasePair`
//! whose phases borrow their thermo models, so one property database can
//! serve many closure-law instances at once. Everything behind the traits is
//! `Send + Sync` for that reason.
//!
//! # Example
//!
//! ```
//! use ic_thermo::{FrozenMixture, FrozenPure, FrozenSpecies, Phase, PhasePair, PhaseThermo};
//!
//! let steam = FrozenSpecies::new("H2O", 18.015, 1900.0, 2.5e6, 373.15, 2.0e-5);
//! let air = FrozenSpecies::new("N2", 28.014, 1040.0, 0.0, 298.15, 2.2e-5);
//! let gas = FrozenMixture::uniform(1, 101_325.0, 350.0, 1.0, vec![(steam.clone(), 0.01), (air, 0.99)])
//!     .unwrap();
//! let water = FrozenPure::uniform(1, 101_325.0, 350.0, 970.0, FrozenSpecies::new("H2O", 18.015, 4180.0, 4.2e5, 373.15, 1.6e-7))
//!     .unwrap();
//!
//! let pair = PhasePair::new(Phase::new("gas", &gas), Phase::new("liquid", &water)).unwrap();
//! assert_eq!(pair.name(), "gas_liquid");
//! assert!(pair.phase1().has_composition());
//! assert!(pair.phase2().thermo().composition().is_none());
//! ```

pub mod error;
pub mod frozen;
pub mod model;
pub mod phase;
pub mod species;

// Re-exports for ergonomics
pub use error::{ThermoError, ThermoResult};
pub use frozen::{FrozenMixture, FrozenPure, FrozenSpecies};
pub use model::{PhaseThermo, SpeciesMixture};
pub use phase::{Phase, PhasePair};
pub use species::SpeciesTable;

//! Saturation-pressure models.
//!
//! A saturation model relates saturation pressure and temperature for a
//! single species. Closure laws select one through a nested configuration
//! record, looked up by its `type` entry in [`saturation_models`].

mod antoine;
mod antoine_extended;
mod arden_buck;
mod constant;
mod polynomial;

pub use antoine::Antoine;
pub use antoine_extended::AntoineExtended;
pub use arden_buck::ArdenBuck;
pub use constant::ConstantSaturationConditions;
pub use polynomial::Polynomial;

use crate::config::ConfigRecord;
use crate::error::{CompositionError, CompositionResult};
use crate::registry::Registry;
use ic_core::ScalarField;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Saturation pressure as a function of temperature, and its inverse.
pub trait SaturationModel: Send + Sync + fmt::Debug {
    /// Registered type name.
    fn type_name(&self) -> &'static str;

    /// Saturation pressure [Pa] at temperature `t` [K].
    fn p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField>;

    /// d(pSat)/dT [Pa/K].
    fn p_sat_prime(&self, t: &ScalarField) -> CompositionResult<ScalarField>;

    /// Natural log of the saturation pressure.
    fn ln_p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(self.p_sat(t)?.map(f64::ln))
    }

    /// Saturation temperature [K] at pressure `p` [Pa].
    fn t_sat(&self, p: &ScalarField) -> CompositionResult<ScalarField>;
}

/// Boxed saturation model.
pub type BoxedSaturation = Box<dyn SaturationModel>;

/// Constructor for a saturation model.
pub type SaturationConstructor = fn(&ConfigRecord) -> CompositionResult<BoxedSaturation>;

/// Registry of saturation models.
pub type SaturationRegistry = Registry<SaturationConstructor>;

impl Registry<SaturationConstructor> {
    /// Registry holding every built-in saturation model.
    pub fn with_builtins() -> CompositionResult<Self> {
        let mut registry = Registry::new("saturation pressure");
        antoine::register(&mut registry)?;
        antoine_extended::register(&mut registry)?;
        arden_buck::register(&mut registry)?;
        constant::register(&mut registry)?;
        polynomial::register(&mut registry)?;
        Ok(registry)
    }

    /// Construct the saturation model named by `config`'s `type` entry.
    pub fn construct(&self, config: &ConfigRecord) -> CompositionResult<BoxedSaturation> {
        let type_name = config.model_type()?;
        let ctor = self.get(type_name)?;
        debug!(
            model = type_name,
            config = config.name(),
            "constructing saturation model"
        );
        ctor(config)
    }
}

static SATURATION_MODELS: OnceLock<CompositionResult<SaturationRegistry>> = OnceLock::new();

/// Process-wide registry of built-in saturation models.
pub fn saturation_models() -> CompositionResult<&'static SaturationRegistry> {
    SATURATION_MODELS
        .get_or_init(SaturationRegistry::with_builtins)
        .as_ref()
        .map_err(Clone::clone)
}

/// Construct a saturation model from the process-wide registry.
pub fn construct_saturation(config: &ConfigRecord) -> CompositionResult<BoxedSaturation> {
    saturation_models()?.construct(config)
}

/// Required real coefficient, rejecting non-finite values.
fn coefficient(config: &ConfigRecord, key: &str) -> CompositionResult<f64> {
    let value: f64 = config.lookup(key)?;
    if !value.is_finite() {
        return Err(CompositionError::invalid_config(format!(
            "'{}/{key}' must be finite, got {value}",
            config.name()
        )));
    }
    Ok(value)
}

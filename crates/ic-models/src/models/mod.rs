//! Built-in closure laws.

pub mod henry;
pub mod nrtl;
pub mod raoult;
pub mod saturated;

pub use henry::Henry;
pub use nrtl::{NonRandomTwoLiquid, NrtlCoefficients};
pub use raoult::Raoult;
pub use saturated::Saturated;

use crate::config::ConfigRecord;
use crate::error::CompositionResult;
use crate::registry::ModelRegistry;
use ic_core::Real;

/// Register every built-in closure law.
pub fn register_builtins(registry: &mut ModelRegistry) -> CompositionResult<()> {
    henry::register(registry)?;
    nrtl::register(registry)?;
    raoult::register(registry)?;
    saturated::register(registry)?;
    Ok(())
}

/// Nested record describing `species` inside a mixture model.
///
/// The nested record inherits `Le` from its parent, and lists only
/// `species` unless it names its own species.
pub(crate) fn species_record(config: &ConfigRecord, species: &str) -> CompositionResult<ConfigRecord> {
    let mut record = config.sub_dict(species)?;
    if !record.contains("species") {
        record = record.with_entry("species", vec![species.to_string()]);
    }
    if !record.contains("Le") {
        let le: Real = config.lookup("Le")?;
        record = record.with_entry("Le", le);
    }
    Ok(record)
}

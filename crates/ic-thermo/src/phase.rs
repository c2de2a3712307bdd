//! Phases and ordered phase pairs.

use crate::error::{ThermoError, ThermoResult};
use crate::model::{PhaseThermo, SpeciesMixture};

/// A named phase borrowing its thermodynamic model.
#[derive(Clone, Copy)]
pub struct Phase<'a> {
    name: &'a str,
    thermo: &'a dyn PhaseThermo,
}

impl<'a> Phase<'a> {
    pub fn new(name: &'a str, thermo: &'a dyn PhaseThermo) -> Self {
        Self { name, thermo }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn thermo(&self) -> &'a dyn PhaseThermo {
        self.thermo
    }

    /// Whether this phase carries a multi-species composition.
    pub fn has_composition(&self) -> bool {
        self.thermo.composition().is_some()
    }

    /// The phase composition, or `NoComposition` naming this phase.
    pub fn composition(&self) -> ThermoResult<&'a dyn SpeciesMixture> {
        self.thermo
            .composition()
            .ok_or_else(|| ThermoError::NoComposition {
                phase: self.name.to_string(),
            })
    }
}

impl std::fmt::Debug for Phase<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Phase")
            .field("name", &self.name)
            .field("thermo", &self.thermo.name())
            .finish()
    }
}

/// Ordered pair of phases.
///
/// Phase 1 is the side whose interface composition is modelled; phase 2 is
/// the side it exchanges mass with. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct PhasePair<'a> {
    phase1: Phase<'a>,
    phase2: Phase<'a>,
}

impl<'a> PhasePair<'a> {
    /// Create a pair; both phases must have distinct names.
    pub fn new(phase1: Phase<'a>, phase2: Phase<'a>) -> ThermoResult<Self> {
        if phase1.name() == phase2.name() {
            return Err(ThermoError::DuplicatePhase {
                phase: phase1.name().to_string(),
            });
        }
        Ok(Self { phase1, phase2 })
    }

    /// "This side" of the interface.
    pub fn phase1(&self) -> &Phase<'a> {
        &self.phase1
    }

    /// "Other side" of the interface.
    pub fn phase2(&self) -> &Phase<'a> {
        &self.phase2
    }

    pub fn name(&self) -> String {
        format!("{}_{}", self.phase1.name(), self.phase2.name())
    }

    pub fn contains(&self, phase: &str) -> bool {
        self.phase1.name() == phase || self.phase2.name() == phase
    }

    /// The phase on the other side from `phase`, if `phase` belongs to the pair.
    pub fn other(&self, phase: &str) -> Option<&Phase<'a>> {
        if self.phase1.name() == phase {
            Some(&self.phase2)
        } else if self.phase2.name() == phase {
            Some(&self.phase1)
        } else {
            None
        }
    }

    /// Same phases with the roles exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            phase1: self.phase2,
            phase2: self.phase1,
        }
    }
}

//! YAML case files: two frozen-property phases, a closure law and the
//! interface conditions to evaluate it at.

use ic_core::{Real, ScalarField, uniform};
use ic_models::ConfigRecord;
use ic_thermo::{FrozenMixture, FrozenPure, FrozenSpecies, Phase, PhasePair, PhaseThermo};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Invalid case: {what}")]
    Invalid { what: String },

    #[error(transparent)]
    Thermo(#[from] ic_thermo::ThermoError),

    #[error(transparent)]
    Composition(#[from] ic_models::CompositionError),
}

pub type CaseResult<T> = Result<T, CaseError>;

/// One species of a mixture phase with its bulk mass fraction.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesEntry {
    #[serde(flatten)]
    pub props: FrozenSpecies,
    #[serde(rename = "Y")]
    pub y: Real,
}

/// A phase with uniform bulk state.
#[derive(Debug, Clone, Deserialize)]
pub struct PhaseEntry {
    pub name: String,
    pub p: Real,
    #[serde(rename = "T")]
    pub t: Real,
    pub rho: Real,
    /// Mixture species; mutually exclusive with `pure`.
    #[serde(default)]
    pub species: Vec<SpeciesEntry>,
    pub pure: Option<FrozenSpecies>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseFile {
    pub cells: usize,
    pub phases: Vec<PhaseEntry>,
    /// Phase names, "this side" first.
    pub pair: [String; 2],
    pub model: serde_yaml::Value,
    #[serde(rename = "Tf")]
    pub tf: Real,
    /// Transfer coefficient for `add_dmdt_l`.
    #[serde(rename = "K", default)]
    pub k: Option<Real>,
}

/// Thermo model built from a phase entry.
pub enum CasePhase {
    Mixture(FrozenMixture),
    Pure(FrozenPure),
}

impl CasePhase {
    pub fn thermo(&self) -> &dyn PhaseThermo {
        match self {
            CasePhase::Mixture(m) => m,
            CasePhase::Pure(p) => p,
        }
    }
}

/// A loaded case with its phases built.
pub struct Case {
    pub file: CaseFile,
    phases: Vec<(String, CasePhase)>,
}

impl CaseFile {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

impl Case {
    pub fn load(path: &Path) -> Result<Self, crate::CliError> {
        let text = std::fs::read_to_string(path)?;
        let file = CaseFile::from_yaml_str(&text)?;
        info!(case = %path.display(), cells = file.cells, "loaded case");
        Ok(Self::build(file)?)
    }

    pub fn build(file: CaseFile) -> CaseResult<Self> {
        if file.cells == 0 {
            return Err(CaseError::Invalid {
                what: "cells must be at least 1".into(),
            });
        }
        let mut phases = Vec::with_capacity(file.phases.len());
        for entry in &file.phases {
            phases.push((entry.name.clone(), build_phase(entry, file.cells)?));
        }
        Ok(Self { file, phases })
    }

    fn phase(&self, name: &str) -> CaseResult<Phase<'_>> {
        self.phases
            .iter()
            .find(|(n, _)| n == name)
            .map(|(n, phase)| Phase::new(n, phase.thermo()))
            .ok_or_else(|| CaseError::Invalid {
                what: format!("pair names unknown phase '{name}'"),
            })
    }

    pub fn pair(&self) -> CaseResult<PhasePair<'_>> {
        let [this, other] = &self.file.pair;
        Ok(PhasePair::new(self.phase(this)?, self.phase(other)?)?)
    }

    pub fn model_config(&self) -> CaseResult<ConfigRecord> {
        Ok(ConfigRecord::from_value(
            "model",
            self.file.model.clone(),
        )?)
    }

    pub fn tf(&self) -> ScalarField {
        uniform(self.file.cells, self.file.tf)
    }

    pub fn k(&self) -> Option<ScalarField> {
        self.file.k.map(|k| uniform(self.file.cells, k))
    }
}

fn build_phase(entry: &PhaseEntry, cells: usize) -> CaseResult<CasePhase> {
    match (&entry.pure, entry.species.is_empty()) {
        (Some(pure), true) => Ok(CasePhase::Pure(FrozenPure::uniform(
            cells,
            entry.p,
            entry.t,
            entry.rho,
            pure.clone(),
        )?)),
        (None, false) => Ok(CasePhase::Mixture(FrozenMixture::uniform(
            cells,
            entry.p,
            entry.t,
            entry.rho,
            entry.species
                .iter()
                .map(|s| (s.props.clone(), s.y))
                .collect(),
        )?)),
        _ => Err(CaseError::Invalid {
            what: format!(
                "phase '{}' needs exactly one of 'species' or 'pure'",
                entry.name
            ),
        }),
    }
}

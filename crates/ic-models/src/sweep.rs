//! Temperature sweeps of a closure law.
//!
//! A sweep evaluates one species over a range of uniform interface
//! temperatures, against the state cached by the model's last `update`.
//! Points are independent and run in parallel.

use crate::error::{CompositionError, CompositionResult};
use crate::model::InterfaceCompositionModel;
use ic_core::{Real, Temperature, k_value, uniform};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// Spacing of sweep points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SweepSpacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Interface temperatures to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSweep {
    start: Temperature,
    end: Temperature,
    points: usize,
    spacing: SweepSpacing,
}

impl TemperatureSweep {
    pub fn new(
        start: Temperature,
        end: Temperature,
        points: usize,
        spacing: SweepSpacing,
    ) -> CompositionResult<Self> {
        let (t0, t1) = (k_value(start), k_value(end));
        if !(t0.is_finite() && t1.is_finite()) || t0 <= 0.0 || t1 <= 0.0 {
            return Err(CompositionError::invalid_config(format!(
                "sweep temperatures must be positive, got {t0} K to {t1} K"
            )));
        }
        if points < 2 {
            return Err(CompositionError::invalid_config(
                "sweep must have at least 2 points",
            ));
        }
        if (t0 - t1).abs() < 1e-12 {
            return Err(CompositionError::invalid_config(
                "sweep start and end must differ",
            ));
        }
        Ok(Self {
            start,
            end,
            points,
            spacing,
        })
    }

    pub fn len(&self) -> usize {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    /// Sweep temperatures [K], endpoints exact.
    pub fn temperatures(&self) -> Vec<Real> {
        let (t0, t1) = (k_value(self.start), k_value(self.end));
        let last = self.points - 1;
        let mut out: Vec<Real> = match self.spacing {
            SweepSpacing::Linear => {
                let delta = (t1 - t0) / last as Real;
                (0..self.points).map(|i| t0 + i as Real * delta).collect()
            }
            SweepSpacing::Logarithmic => {
                let (l0, l1) = (t0.ln(), t1.ln());
                let delta = (l1 - l0) / last as Real;
                (0..self.points)
                    .map(|i| (l0 + i as Real * delta).exp())
                    .collect()
            }
        };
        out[last] = t1;
        out
    }
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for TemperatureSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep Tf from {} K to {} K ({} points, {})",
            k_value(self.start),
            k_value(self.end),
            self.points,
            self.spacing
        )
    }
}

/// Cell-averaged results at one sweep temperature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    #[serde(rename = "Tf")]
    pub temperature: Real,
    #[serde(rename = "Yf")]
    pub yf: Real,
    #[serde(rename = "YfPrime")]
    pub yf_prime: Real,
    #[serde(rename = "dY")]
    pub dy: Real,
    #[serde(rename = "L")]
    pub latent_heat: Real,
}

/// Evaluate `species` at every sweep temperature.
pub fn evaluate_sweep(
    model: &dyn InterfaceCompositionModel,
    species: &str,
    sweep: &TemperatureSweep,
) -> CompositionResult<Vec<SweepPoint>> {
    let n_cells = model.thermo().n_cells();
    sweep
        .temperatures()
        .par_iter()
        .map(|&t| {
            let tf = uniform(n_cells, t);
            Ok(SweepPoint {
                temperature: t,
                yf: model.yf(species, &tf)?.mean(),
                yf_prime: model.yf_prime(species, &tf)?.mean(),
                dy: model.dy(species, &tf)?.mean(),
                latent_heat: model.latent_heat(species, &tf)?.mean(),
            })
        })
        .collect()
}

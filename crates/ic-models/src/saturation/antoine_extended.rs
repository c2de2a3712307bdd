//! Extended Antoine equation:
//! `ln(pSat) = A + B / (C + T) + D ln(T) + E T^F`.

use super::{BoxedSaturation, SaturationModel, SaturationRegistry, coefficient};
use crate::config::ConfigRecord;
use crate::error::CompositionResult;
use crate::newton::{NewtonConfig, solve_positive};
use ic_core::{Real, ScalarField, try_map};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoineExtended {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
    pub e: Real,
    pub f: Real,
}

impl AntoineExtended {
    pub const TYPE_NAME: &'static str = "AntoineExtended";

    /// Starting temperature for the inverse.
    const T_INITIAL: Real = 373.15;

    pub fn new(a: Real, b: Real, c: Real, d: Real, e: Real, f: Real) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn from_config(config: &ConfigRecord) -> CompositionResult<Self> {
        Ok(Self::new(
            coefficient(config, "A")?,
            coefficient(config, "B")?,
            coefficient(config, "C")?,
            coefficient(config, "D")?,
            coefficient(config, "E")?,
            coefficient(config, "F")?,
        ))
    }

    fn ln_p(&self, t: Real) -> Real {
        self.a + self.b / (self.c + t) + self.d * t.ln() + self.e * t.powf(self.f)
    }

    /// d(ln pSat)/dT.
    fn ln_p_prime(&self, t: Real) -> Real {
        -self.b / (self.c + t).powi(2) + self.d / t + self.e * self.f * t.powf(self.f - 1.0)
    }
}

impl SaturationModel for AntoineExtended {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(|t| self.ln_p(t).exp()))
    }

    fn p_sat_prime(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(|t| self.ln_p(t).exp() * self.ln_p_prime(t)))
    }

    fn ln_p_sat(&self, t: &ScalarField) -> CompositionResult<ScalarField> {
        Ok(t.map(|t| self.ln_p(t)))
    }

    fn t_sat(&self, p: &ScalarField) -> CompositionResult<ScalarField> {
        let config = NewtonConfig::default();
        try_map(p, |p| {
            let target = p.ln();
            solve_positive(
                Self::T_INITIAL,
                |t| (self.ln_p(t) - target, self.ln_p_prime(t)),
                &config,
                "AntoineExtended saturation temperature",
            )
        })
    }
}

fn construct(config: &ConfigRecord) -> CompositionResult<BoxedSaturation> {
    Ok(Box::new(AntoineExtended::from_config(config)?))
}

pub(super) fn register(registry: &mut SaturationRegistry) -> CompositionResult<()> {
    registry.register(AntoineExtended::TYPE_NAME, construct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saturation::Antoine;
    use ic_core::uniform;

    // Water (DIPPR 101 form, Pa and K).
    fn water() -> AntoineExtended {
        AntoineExtended::new(73.649, -7258.2, 0.0, -7.3037, 4.1653e-6, 2.0)
    }

    #[test]
    fn reduces_to_antoine() {
        let plain = Antoine::new(23.2256, -3835.18, -45.343);
        let extended = AntoineExtended::new(23.2256, -3835.18, -45.343, 0.0, 0.0, 1.0);
        let t = ScalarField::from_vec(vec![300.0, 360.0]);
        let a = plain.p_sat(&t).unwrap();
        let b = extended.p_sat(&t).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() / x < 1e-12);
        }
    }

    #[test]
    fn boiling_point_of_water() {
        let p = water().p_sat(&uniform(1, 373.15)).unwrap();
        assert!((p[0] - 101_325.0).abs() / 101_325.0 < 0.02);
    }

    #[test]
    fn t_sat_inverts_p_sat() {
        let model = water();
        let t = ScalarField::from_vec(vec![290.0, 373.15, 450.0]);
        let back = model.t_sat(&model.p_sat(&t).unwrap()).unwrap();
        for (a, b) in t.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn derivative_matches_difference() {
        let model = water();
        let h = 1e-3;
        let p = |t: Real| model.p_sat(&uniform(1, t)).unwrap()[0];
        let numeric = (p(330.0 + h) - p(330.0 - h)) / (2.0 * h);
        let analytic = model.p_sat_prime(&uniform(1, 330.0)).unwrap()[0];
        assert!((numeric - analytic).abs() / analytic < 1e-6);
    }
}

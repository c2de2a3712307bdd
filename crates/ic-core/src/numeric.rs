use crate::IcError;

/// Floating point type used throughout system
pub type Real = f64;

/// Floor used where a denominator may vanish (e.g. `1 - Y` for a pure species).
pub const SMALL: Real = 1e-15;

/// One tolerance for everything
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, IcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(IcError::NonFinite { what, value: v })
    }
}

/// Ensure a value is finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, IcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(IcError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1.0, "Le").is_ok());
        assert!(ensure_positive(0.0, "Le").is_err());
        assert!(ensure_positive(-2.0, "Le").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "Le"),
            Err(IcError::NonFinite { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6..1e6_f64, b in -1e6..1e6_f64) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn nearly_equal_within_relative_band(a in 1e-3..1e6_f64, scale in -0.9..0.9_f64) {
            let tol = Tolerances { abs: 0.0, rel: 1e-6 };
            prop_assert!(nearly_equal(a, a * (1.0 + scale * 1e-6), tol));
        }
    }
}

//! Frozen-property thermodynamic models.
//!
//! These are small, self-contained collaborators built from constant species
//! properties: specific heat, reference enthalpy and thermal diffusivity do
//! not vary with state. They are NOT a property database; they exist so that
//! closure laws can be exercised (tests, case files) without one.
//!
//! Enthalpy of a species follows
//!
//! ```text
//! h(T) = h_ref + cp * (T - T_ref)
//! ```

use crate::error::{ThermoError, ThermoResult};
use crate::model::validation::{validate_mass_fraction, validate_non_negative, validate_positive};
use crate::model::{PhaseThermo, SpeciesMixture};
use crate::species::SpeciesTable;
use ic_core::{Real, ScalarField, ensure_len, uniform};
use tracing::debug;

/// Constant properties of one species.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrozenSpecies {
    /// Species name
    pub name: String,
    /// Molar mass [kg/kmol]
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    pub molar_mass: Real,
    /// Specific heat capacity at constant pressure [J/(kg·K)]
    #[cfg_attr(feature = "serde", serde(rename = "Cp"))]
    pub cp: Real,
    /// Specific enthalpy at the reference temperature [J/kg]
    #[cfg_attr(feature = "serde", serde(rename = "Href", default))]
    pub h_ref: Real,
    /// Reference temperature [K]
    #[cfg_attr(feature = "serde", serde(rename = "Tref", default = "default_t_ref"))]
    pub t_ref: Real,
    /// Thermal diffusivity [m²/s]
    pub alpha: Real,
}

#[cfg(feature = "serde")]
fn default_t_ref() -> Real {
    298.15
}

impl FrozenSpecies {
    pub fn new(
        name: impl Into<String>,
        molar_mass: Real,
        cp: Real,
        h_ref: Real,
        t_ref: Real,
        alpha: Real,
    ) -> Self {
        Self {
            name: name.into(),
            molar_mass,
            cp,
            h_ref,
            t_ref,
            alpha,
        }
    }

    /// Specific enthalpy at temperature `t_k`, assuming constant cp.
    pub fn enthalpy(&self, t_k: Real) -> Real {
        self.h_ref + self.cp * (t_k - self.t_ref)
    }

    fn validate(&self) -> ThermoResult<()> {
        if !self.molar_mass.is_finite() || self.molar_mass <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "molar mass must be positive and finite",
            });
        }
        if !self.cp.is_finite() || !self.h_ref.is_finite() || !self.t_ref.is_finite() {
            return Err(ThermoError::NonPhysical {
                what: "enthalpy coefficients must be finite",
            });
        }
        validate_non_negative(self.alpha, "thermal diffusivity must be non-negative")
    }
}

/// Bulk state shared by frozen models.
#[derive(Debug, Clone, PartialEq)]
struct BulkState {
    p: ScalarField,
    t: ScalarField,
    rho: ScalarField,
}

impl BulkState {
    fn new(p: ScalarField, t: ScalarField, rho: ScalarField) -> ThermoResult<Self> {
        let n = p.len();
        if n == 0 {
            return Err(ThermoError::InvalidArg {
                what: "fields must have at least one cell",
            });
        }
        ensure_len(&t, n, "temperature")?;
        ensure_len(&rho, n, "density")?;
        validate_positive(&p, "pressure must be positive and finite")?;
        validate_positive(&t, "temperature must be positive and finite")?;
        validate_positive(&rho, "density must be positive and finite")?;
        Ok(Self { p, t, rho })
    }
}

/// Multi-species phase with frozen species properties.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenMixture {
    species: SpeciesTable,
    props: Vec<FrozenSpecies>,
    y: Vec<ScalarField>,
    bulk: BulkState,
    w: ScalarField,
}

impl FrozenMixture {
    /// Create a mixture from bulk fields and per-species mass fraction fields.
    ///
    /// Mass fractions must lie in [0, 1] and sum to at most one in every cell.
    /// The mixture molar mass is `1 / Σ(Y_i / W_i)`.
    pub fn new(
        p: ScalarField,
        t: ScalarField,
        rho: ScalarField,
        species: Vec<(FrozenSpecies, ScalarField)>,
    ) -> ThermoResult<Self> {
        if species.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "mixture needs at least one species",
            });
        }
        let bulk = BulkState::new(p, t, rho)?;
        let n = bulk.p.len();

        let table = SpeciesTable::new(species.iter().map(|(s, _)| s.name.clone()))?;
        let mut props = Vec::with_capacity(species.len());
        let mut y = Vec::with_capacity(species.len());
        for (entry, frac) in species {
            entry.validate()?;
            ensure_len(&frac, n, "mass fraction")?;
            validate_mass_fraction(&frac, "mass fraction must lie in [0, 1]")?;
            props.push(entry);
            y.push(frac);
        }

        let mut sum_y = ScalarField::zeros(n);
        let mut y_by_w = ScalarField::zeros(n);
        for (entry, frac) in props.iter().zip(&y) {
            sum_y += frac;
            y_by_w += frac / entry.molar_mass;
        }
        if sum_y.iter().any(|s| *s > 1.0 + 1e-9) {
            return Err(ThermoError::NonPhysical {
                what: "mass fractions sum above one",
            });
        }
        if y_by_w.iter().any(|v| *v <= 0.0) {
            return Err(ThermoError::NonPhysical {
                what: "mass fractions sum to zero",
            });
        }
        let w = y_by_w.map(|v| 1.0 / v);

        debug!(n_cells = n, species = %table, "built frozen mixture");
        Ok(Self {
            species: table,
            props,
            y,
            bulk,
            w,
        })
    }

    /// Mixture with uniform bulk state and mass fractions.
    pub fn uniform(
        n_cells: usize,
        p: Real,
        t: Real,
        rho: Real,
        species: Vec<(FrozenSpecies, Real)>,
    ) -> ThermoResult<Self> {
        Self::new(
            uniform(n_cells, p),
            uniform(n_cells, t),
            uniform(n_cells, rho),
            species
                .into_iter()
                .map(|(s, frac)| (s, uniform(n_cells, frac)))
                .collect(),
        )
    }

    fn lookup(&self, species: &str) -> ThermoResult<usize> {
        self.species
            .index(species)
            .ok_or_else(|| ThermoError::UnknownSpecies {
                species: species.to_string(),
                phase: self.name().to_string(),
            })
    }
}

impl PhaseThermo for FrozenMixture {
    fn name(&self) -> &str {
        "frozenMixture"
    }

    fn n_cells(&self) -> usize {
        self.bulk.p.len()
    }

    fn p(&self) -> &ScalarField {
        &self.bulk.p
    }

    fn t(&self) -> &ScalarField {
        &self.bulk.t
    }

    fn rho(&self) -> &ScalarField {
        &self.bulk.rho
    }

    fn molar_mass(&self) -> &ScalarField {
        &self.w
    }

    fn he(&self, t: &ScalarField) -> ThermoResult<ScalarField> {
        ensure_len(t, self.n_cells(), "temperature")?;
        let mut h = ScalarField::zeros(t.len());
        for (entry, frac) in self.props.iter().zip(&self.y) {
            h += frac.component_mul(&t.map(|tk| entry.enthalpy(tk)));
        }
        Ok(h)
    }

    fn composition(&self) -> Option<&dyn SpeciesMixture> {
        Some(self)
    }
}

impl SpeciesMixture for FrozenMixture {
    fn species(&self) -> &SpeciesTable {
        &self.species
    }

    fn y(&self, species: &str) -> ThermoResult<&ScalarField> {
        let i = self.lookup(species)?;
        Ok(&self.y[i])
    }

    fn molar_mass(&self, species: &str) -> ThermoResult<Real> {
        let i = self.lookup(species)?;
        Ok(self.props[i].molar_mass)
    }

    fn ha(&self, species: &str, t: &ScalarField) -> ThermoResult<ScalarField> {
        let i = self.lookup(species)?;
        ensure_len(t, self.n_cells(), "temperature")?;
        Ok(t.map(|tk| self.props[i].enthalpy(tk)))
    }

    fn thermal_diffusivity(&self, species: &str) -> ThermoResult<ScalarField> {
        let i = self.lookup(species)?;
        Ok(uniform(self.n_cells(), self.props[i].alpha))
    }
}

/// Single-component phase without a speciated composition.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenPure {
    species: FrozenSpecies,
    bulk: BulkState,
    w: ScalarField,
}

impl FrozenPure {
    pub fn new(
        p: ScalarField,
        t: ScalarField,
        rho: ScalarField,
        species: FrozenSpecies,
    ) -> ThermoResult<Self> {
        species.validate()?;
        let bulk = BulkState::new(p, t, rho)?;
        let w = uniform(bulk.p.len(), species.molar_mass);
        Ok(Self { species, bulk, w })
    }

    /// Pure phase with uniform bulk state.
    pub fn uniform(
        n_cells: usize,
        p: Real,
        t: Real,
        rho: Real,
        species: FrozenSpecies,
    ) -> ThermoResult<Self> {
        Self::new(
            uniform(n_cells, p),
            uniform(n_cells, t),
            uniform(n_cells, rho),
            species,
        )
    }

    pub fn species(&self) -> &FrozenSpecies {
        &self.species
    }
}

impl PhaseThermo for FrozenPure {
    fn name(&self) -> &str {
        "frozenPure"
    }

    fn n_cells(&self) -> usize {
        self.bulk.p.len()
    }

    fn p(&self) -> &ScalarField {
        &self.bulk.p
    }

    fn t(&self) -> &ScalarField {
        &self.bulk.t
    }

    fn rho(&self) -> &ScalarField {
        &self.bulk.rho
    }

    fn molar_mass(&self) -> &ScalarField {
        &self.w
    }

    fn he(&self, t: &ScalarField) -> ThermoResult<ScalarField> {
        ensure_len(t, self.n_cells(), "temperature")?;
        Ok(t.map(|tk| self.species.enthalpy(tk)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ic_core::{Tolerances, nearly_equal};

    fn steam() -> FrozenSpecies {
        FrozenSpecies::new("H2O", 18.015, 1900.0, 2.5e6, 373.15, 2.0e-5)
    }

    fn nitrogen() -> FrozenSpecies {
        FrozenSpecies::new("N2", 28.014, 1040.0, 0.0, 298.15, 2.2e-5)
    }

    #[test]
    fn enthalpy_is_linear_in_temperature() {
        let s = steam();
        assert_eq!(s.enthalpy(373.15), 2.5e6);
        assert!(nearly_equal(
            s.enthalpy(383.15) - s.enthalpy(373.15),
            19_000.0,
            Tolerances::default()
        ));
    }

    #[test]
    fn mixture_molar_mass_from_mass_fractions() {
        let mix =
            FrozenMixture::uniform(2, 1e5, 350.0, 1.0, vec![(steam(), 0.5), (nitrogen(), 0.5)])
                .unwrap();
        let expected = 1.0 / (0.5 / 18.015 + 0.5 / 28.014);
        let tol = Tolerances::default();
        assert!(mix.w.iter().all(|w| nearly_equal(*w, expected, tol)));
        assert_eq!(SpeciesMixture::molar_mass(&mix, "N2").unwrap(), 28.014);
    }

    #[test]
    fn mixture_enthalpy_is_mass_weighted() {
        let mix =
            FrozenMixture::uniform(1, 1e5, 350.0, 1.0, vec![(steam(), 0.25), (nitrogen(), 0.75)])
                .unwrap();
        let t = uniform(1, 350.0);
        let he = mix.he(&t).unwrap();
        let expected = 0.25 * steam().enthalpy(350.0) + 0.75 * nitrogen().enthalpy(350.0);
        assert!(nearly_equal(he[0], expected, Tolerances::default()));
    }

    #[test]
    fn unknown_species_names_phase_model() {
        let mix = FrozenMixture::uniform(1, 1e5, 350.0, 1.0, vec![(steam(), 1.0)]).unwrap();
        let err = mix.y("CO2").unwrap_err();
        assert!(matches!(err, ThermoError::UnknownSpecies { ref species, .. } if species == "CO2"));
    }

    #[test]
    fn rejects_fractions_above_one() {
        let result =
            FrozenMixture::uniform(1, 1e5, 350.0, 1.0, vec![(steam(), 0.7), (nitrogen(), 0.7)]);
        assert!(matches!(result, Err(ThermoError::NonPhysical { .. })));
    }

    #[test]
    fn rejects_mismatched_fields() {
        let result = FrozenMixture::new(
            uniform(2, 1e5),
            uniform(3, 350.0),
            uniform(2, 1.0),
            vec![(steam(), uniform(2, 1.0))],
        );
        assert!(matches!(result, Err(ThermoError::Core(_))));
    }

    #[test]
    fn pure_phase_has_no_composition() {
        let pure = FrozenPure::uniform(3, 1e5, 350.0, 970.0, steam()).unwrap();
        assert!(pure.composition().is_none());
        assert_eq!(pure.molar_mass().len(), 3);
        let he = pure.he(&uniform(3, 373.15)).unwrap();
        assert!(he.iter().all(|h| *h == 2.5e6));
    }

    #[test]
    fn thermal_diffusivity_is_per_species() {
        let mix =
            FrozenMixture::uniform(2, 1e5, 350.0, 1.0, vec![(steam(), 0.1), (nitrogen(), 0.9)])
                .unwrap();
        assert!(mix.thermal_diffusivity("H2O").unwrap().iter().all(|a| *a == 2.0e-5));
        assert!(mix.thermal_diffusivity("N2").unwrap().iter().all(|a| *a == 2.2e-5));
    }
}

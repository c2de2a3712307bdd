//! Ordered species tables.

use crate::error::{ThermoError, ThermoResult};
use std::collections::HashMap;
use std::fmt;

/// Ordered set of unique species names.
///
/// Insertion order is the iteration order, which downstream aggregation
/// (e.g. summing per-species source terms) relies on. Lookup by name is O(1).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeciesTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SpeciesTable {
    /// Build a table, rejecting empty names and duplicates.
    pub fn new<I, S>(names: I) -> ThermoResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for name in names {
            table.push(name.into())?;
        }
        Ok(table)
    }

    fn push(&mut self, name: String) -> ThermoResult<()> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "empty species name",
            });
        }
        if self.index.contains_key(&name) {
            return Err(ThermoError::DuplicateSpecies { species: name });
        }
        self.index.insert(name.clone(), self.names.len());
        self.names.push(name);
        Ok(())
    }

    /// Position of a species in insertion order.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True if every species of `self` is also in `other`.
    pub fn is_subset_of(&self, other: &SpeciesTable) -> bool {
        self.iter().all(|name| other.contains(name))
    }
}

impl fmt::Display for SpeciesTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.names.join(" "))
    }
}

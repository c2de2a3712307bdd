//! Configuration records.
//!
//! A record is a named YAML mapping. Every closure law reads its `type` key
//! through the registry and its own parameters through typed lookups; nested
//! models get a sub-record whose name is the parent path plus the key, so
//! diagnostics point at the exact entry.
//!
//! ```yaml
//! type: Saturated
//! species: [H2O]
//! Le: 1.0
//! saturationPressure:
//!   type: ArdenBuck
//! ```

use crate::error::{CompositionError, CompositionResult};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

/// Key naming the registered model type.
pub const TYPE_KEY: &str = "type";

/// Named configuration mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigRecord {
    name: String,
    entries: Mapping,
}

impl ConfigRecord {
    pub fn new(name: impl Into<String>, entries: Mapping) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Parse a record from YAML text; the document must be a mapping.
    pub fn from_yaml_str(name: impl Into<String>, text: &str) -> CompositionResult<Self> {
        let name = name.into();
        let value: Value = serde_yaml::from_str(text)
            .map_err(|e| CompositionError::invalid_config(format!("{name}: {e}")))?;
        Self::from_value(name, value)
    }

    /// Wrap a YAML value; it must be a mapping.
    pub fn from_value(name: impl Into<String>, value: Value) -> CompositionResult<Self> {
        let name = name.into();
        match value {
            Value::Mapping(entries) => Ok(Self { name, entries }),
            other => Err(CompositionError::invalid_config(format!(
                "'{name}' must be a mapping, found {}",
                value_kind(&other)
            ))),
        }
    }

    /// Builder-style insertion, mostly for programmatic configuration.
    pub fn with_entry(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.entries.insert(Value::from(key), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// The required `type` entry.
    pub fn model_type(&self) -> CompositionResult<&str> {
        match self.entries.get(TYPE_KEY) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(CompositionError::invalid_config(format!(
                "'{}/{TYPE_KEY}' must be a string",
                self.name
            ))),
            None => Err(CompositionError::invalid_config(format!(
                "missing required key '{TYPE_KEY}' in '{}'",
                self.name
            ))),
        }
    }

    /// Typed lookup of a required entry.
    pub fn lookup<T: DeserializeOwned>(&self, key: &str) -> CompositionResult<T> {
        let value = self.entries.get(key).ok_or_else(|| {
            CompositionError::invalid_config(format!(
                "missing required key '{key}' in '{}'",
                self.name
            ))
        })?;
        self.parse(key, value)
    }

    /// Typed lookup falling back to `default` when the key is absent.
    pub fn lookup_or<T: DeserializeOwned>(&self, key: &str, default: T) -> CompositionResult<T> {
        match self.entries.get(key) {
            Some(value) => self.parse(key, value),
            None => Ok(default),
        }
    }

    /// Nested record stored under `key`.
    pub fn sub_dict(&self, key: &str) -> CompositionResult<ConfigRecord> {
        let value = self.entries.get(key).ok_or_else(|| {
            CompositionError::invalid_config(format!(
                "missing sub-dictionary '{key}' in '{}'",
                self.name
            ))
        })?;
        Self::from_value(format!("{}/{key}", self.name), value.clone())
    }

    fn parse<T: DeserializeOwned>(&self, key: &str, value: &Value) -> CompositionResult<T> {
        serde_yaml::from_value(value.clone()).map_err(|e| {
            CompositionError::invalid_config(format!("'{}/{key}': {e}", self.name))
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SATURATED: &str = r#"
type: Saturated
species: [H2O]
Le: 1.0
saturationPressure:
  type: Antoine
  A: 23.2
  B: -3816.4
  C: -46.1
"#;

    #[test]
    fn typed_lookups() {
        let record = ConfigRecord::from_yaml_str("gas_liquid", SATURATED).unwrap();
        assert_eq!(record.model_type().unwrap(), "Saturated");
        assert_eq!(record.lookup::<Vec<String>>("species").unwrap(), vec!["H2O"]);
        assert_eq!(record.lookup::<f64>("Le").unwrap(), 1.0);
        assert_eq!(record.lookup_or("pInitial", 1e5).unwrap(), 1e5);
        assert!(record.contains("saturationPressure"));
    }

    #[test]
    fn sub_dict_names_are_paths() {
        let record = ConfigRecord::from_yaml_str("gas_liquid", SATURATED).unwrap();
        let sat = record.sub_dict("saturationPressure").unwrap();
        assert_eq!(sat.name(), "gas_liquid/saturationPressure");
        assert_eq!(sat.model_type().unwrap(), "Antoine");
        assert_eq!(sat.lookup::<f64>("B").unwrap(), -3816.4);
    }

    #[test]
    fn missing_keys_are_named() {
        let record = ConfigRecord::from_yaml_str("gas_liquid", "species: [H2O]").unwrap();
        let err = record.model_type().unwrap_err();
        assert!(err.to_string().contains("'type'"));
        let err = record.lookup::<f64>("Le").unwrap_err();
        assert!(err.to_string().contains("'Le'"));
        assert!(err.to_string().contains("gas_liquid"));
    }

    #[test]
    fn malformed_values_are_reported() {
        let record = ConfigRecord::from_yaml_str("r", "Le: lots").unwrap();
        assert!(matches!(
            record.lookup::<f64>("Le"),
            Err(CompositionError::InvalidConfig { .. })
        ));
        assert!(ConfigRecord::from_yaml_str("r", "- a\n- b").is_err());
    }

    #[test]
    fn builder_entries() {
        let record = ConfigRecord::default()
            .with_entry("type", "Henry")
            .with_entry("Le", 2.0);
        assert_eq!(record.model_type().unwrap(), "Henry");
        let mut keys: Vec<&str> = record.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["Le", "type"]);
    }
}

//! Name-keyed model registries.
//!
//! A registry maps a configuration type name to a constructor function.
//! Built-in models register themselves once, the first time the process-wide
//! registry is touched; after that the registry is read-only. A duplicate
//! name is a programming error and is reported the first time the registry
//! is accessed, not when a model happens to be selected.

use crate::config::ConfigRecord;
use crate::error::{CompositionError, CompositionResult};
use crate::model::InterfaceCompositionModel;
use ic_thermo::PhasePair;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Append-only map from type name to constructor.
#[derive(Debug, Clone)]
pub struct Registry<F> {
    kind: &'static str,
    entries: BTreeMap<&'static str, F>,
}

impl<F: Copy> Registry<F> {
    /// Empty registry for models of `kind` (used in diagnostics).
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Register a constructor under `name`.
    pub fn register(&mut self, name: &'static str, ctor: F) -> CompositionResult<()> {
        if self.entries.contains_key(name) {
            return Err(CompositionError::DuplicateModelType {
                kind: self.kind,
                name: name.to_string(),
            });
        }
        debug!(kind = self.kind, name, "registered model type");
        self.entries.insert(name, ctor);
        Ok(())
    }

    /// Constructor registered under `name`, by exact match.
    pub fn get(&self, name: &str) -> CompositionResult<F> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| CompositionError::UnknownModelType {
                kind: self.kind,
                name: name.to_string(),
                valid: self.names().iter().map(|n| n.to_string()).collect(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Boxed closure law borrowing its phase pair for `'a`.
pub type BoxedModel<'a> = Box<dyn InterfaceCompositionModel + 'a>;

/// Constructor for an interface composition model.
///
/// Receives the registry it was looked up in, so that nested models resolve
/// against the same set of types as their parent.
pub type ModelConstructor = for<'a> fn(
    &ModelRegistry,
    &ConfigRecord,
    &'a PhasePair<'a>,
) -> CompositionResult<BoxedModel<'a>>;

/// Registry of interface composition models.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Registry<ModelConstructor>,
}

impl ModelRegistry {
    pub const KIND: &'static str = "interface composition";

    /// Empty registry, for callers assembling their own set of laws.
    pub fn new() -> Self {
        Self {
            entries: Registry::new(Self::KIND),
        }
    }

    /// Registry holding every built-in closure law.
    pub fn with_builtins() -> CompositionResult<Self> {
        let mut registry = Self::new();
        crate::models::register_builtins(&mut registry)?;
        Ok(registry)
    }

    pub fn register(&mut self, name: &'static str, ctor: ModelConstructor) -> CompositionResult<()> {
        self.entries.register(name, ctor)
    }

    pub fn get(&self, name: &str) -> CompositionResult<ModelConstructor> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.names()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Construct the model named by `config`'s `type` entry.
    pub fn construct<'a>(
        &self,
        config: &ConfigRecord,
        pair: &'a PhasePair<'a>,
    ) -> CompositionResult<BoxedModel<'a>> {
        let type_name = config.model_type()?;
        let ctor = self.get(type_name)?;
        debug!(
            model = type_name,
            pair = %pair.name(),
            config = config.name(),
            "constructing interface composition model"
        );
        ctor(self, config, pair)
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static MODELS: OnceLock<CompositionResult<ModelRegistry>> = OnceLock::new();

/// Process-wide registry of built-in closure laws.
pub fn models() -> CompositionResult<&'static ModelRegistry> {
    MODELS
        .get_or_init(ModelRegistry::with_builtins)
        .as_ref()
        .map_err(Clone::clone)
}

/// Construct a closure law from the process-wide registry.
pub fn construct<'a>(
    config: &ConfigRecord,
    pair: &'a PhasePair<'a>,
) -> CompositionResult<BoxedModel<'a>> {
    models()?.construct(config, pair)
}

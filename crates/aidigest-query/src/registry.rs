use aidigest_core::config::DigestConfig;

use crate::engine::{CommandEngine, QueryEngine};

/// Name the configured vault engine is registered under.
pub const VAULT_ENGINE: &str = "dataview";

/// Capability lookup for query engines.
///
/// Absence of an engine is a valid, non-exceptional outcome: callers get
/// `None` and surface a user notice instead of an error.
#[derive(Default)]
pub struct EngineRegistry {
    engines: Vec<Box<dyn QueryEngine>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from a vault config, registering the configured
    /// command engine (if any) under [`VAULT_ENGINE`].
    pub fn from_config(config: &DigestConfig) -> Self {
        let mut registry = Self::new();
        if let Some(engine) = CommandEngine::from_argv(VAULT_ENGINE, &config.engine) {
            registry.register(Box::new(engine));
        }
        registry
    }

    /// Register an engine under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, engine: Box<dyn QueryEngine>) {
        self.engines.retain(|e| e.name() != engine.name());
        self.engines.push(engine);
    }

    /// Look up an engine by name.
    pub fn get(&self, name: &str) -> Option<&dyn QueryEngine> {
        self.engines
            .iter()
            .find(|e| e.name() == name)
            .map(Box::as_ref)
    }
}

//! Process-wide registry of named points configurations.

use crate::domain::{EstimateProvider, PointsMapping, JIRA_CONFIG};
use crate::error::{PointsError, PointsResult};
use once_cell::sync::Lazy;

static GLOBAL: Lazy<ConfigRegistry> = Lazy::new(|| {
    let mut registry = ConfigRegistry::new();
    registry.register(&JIRA_CONFIG);
    tracing::debug!(configs = ?registry.names(), "points registry initialised");
    registry
});

/// Lookup of points mappings by their stable name
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    mappings: Vec<&'static PointsMapping>,
}

impl ConfigRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared registry holding the built-in configurations
    pub fn global() -> &'static ConfigRegistry {
        &GLOBAL
    }

    /// Register a mapping under its own name, replacing any previous one
    pub fn register(&mut self, mapping: &'static PointsMapping) {
        match self.mappings.iter_mut().find(|m| m.name() == mapping.name()) {
            Some(slot) => *slot = mapping,
            None => self.mappings.push(mapping),
        }
    }

    /// Get a mapping by name
    pub fn get(&self, name: &str) -> PointsResult<&'static PointsMapping> {
        self.mappings
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| PointsError::ConfigNotFound(name.to_string()))
    }

    /// Get a mapping by name as an estimate provider
    pub fn provider(&self, name: &str) -> PointsResult<&'static dyn EstimateProvider> {
        let mapping = self.get(name)?;
        Ok(mapping)
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.mappings.iter().map(|m| m.name()).collect()
    }
}

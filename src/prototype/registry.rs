use std::collections::HashMap;

use tracing::debug;

use crate::config::TemplateConfig;
use crate::error::RegistryError;
use crate::prototype::Enemy;

/// Templates keyed by name. Lookups hand out copies, never the template.
#[derive(Debug, Clone)]
pub struct PrototypeRegistry<T: Clone> {
    prototypes: HashMap<String, T>,
}

impl<T: Clone> PrototypeRegistry<T> {
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Stores `template` under `key`, replacing any earlier template for that key.
    pub fn register(&mut self, key: impl Into<String>, template: T) {
        let key = key.into();
        if self.prototypes.insert(key.clone(), template).is_some() {
            debug!(%key, "prototype replaced");
        } else {
            debug!(%key, "prototype registered");
        }
    }

    /// Returns an independent copy of the template registered under `key`.
    pub fn get(&self, key: &str) -> Result<T, RegistryError> {
        self.prototypes
            .get(key)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                key: key.to_string(),
            })
    }

    pub fn remove(&mut self, key: &str) -> Result<T, RegistryError> {
        self.prototypes
            .remove(key)
            .ok_or_else(|| RegistryError::NotFound {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.prototypes.contains_key(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

impl<T: Clone> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl PrototypeRegistry<Enemy> {
    pub fn from_templates(templates: &[TemplateConfig]) -> Self {
        let mut registry = Self::new();
        for template in templates {
            registry.register(template.key.clone(), template.to_enemy());
        }
        registry
    }
}

//! In-memory map store.

use std::collections::HashMap;

use super::{EnvStore, StoreError};

/// Collects resolved pairs into a map instead of mutating ambient state.
///
/// Precedence (`has`) consults only the map, so pre-existing process
/// variables never block a write. Expansion (`get`) consults the process
/// environment first and falls back to the in-progress map; environment
/// values that are unset or empty fall through to the map.
#[derive(Debug, Default)]
pub struct EnvMap {
    map: HashMap<String, String>,
}

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the store, yielding the resolved key-value set.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.map
    }
}

impl EnvStore for EnvMap {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| self.map.get(key).cloned())
    }

    fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

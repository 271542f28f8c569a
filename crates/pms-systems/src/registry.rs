//! Registry of PMS vendor implementations.

use std::collections::HashMap;
use std::sync::Arc;

use pms_core::Pms;
use tracing::info;

/// Registry mapping vendor names to PMS implementations.
///
/// Names are case-insensitive: a webhook posted to `/webhook/Mews/` resolves
/// the same implementation as `/webhook/mews/`.
pub struct PmsRegistry {
    systems: HashMap<String, Arc<dyn Pms>>,
}

impl PmsRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            systems: HashMap::new(),
        }
    }

    /// Register a PMS implementation.
    ///
    /// If one with the same name already exists, it will be replaced.
    pub fn register<P: Pms + 'static>(&mut self, pms: P) {
        self.register_arc(Arc::new(pms));
    }

    /// Register a shared PMS implementation.
    pub fn register_arc(&mut self, pms: Arc<dyn Pms>) {
        let name = pms.name().to_lowercase();
        info!("Registering PMS: {}", name);
        self.systems.insert(name, pms);
    }

    /// Get a PMS by vendor name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Pms>> {
        self.systems.get(&name.trim().to_lowercase()).cloned()
    }

    /// Check if a vendor is registered.
    pub fn has_pms(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered vendor names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.systems.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// All registered implementations.
    pub fn systems(&self) -> impl Iterator<Item = &Arc<dyn Pms>> {
        self.systems.values()
    }
}

impl Default for PmsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

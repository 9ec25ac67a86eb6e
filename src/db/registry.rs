// Driver Registry
// Manages available data-source drivers, keyed by driver id

use crate::db::traits::{DatabaseDriver, DriverError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry for managing data-source drivers
pub struct DriverRegistry {
    drivers: RwLock<HashMap<String, Arc<dyn DatabaseDriver>>>,
}

impl DriverRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            drivers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a driver under its id
    pub async fn register(&self, driver: Arc<dyn DatabaseDriver>) {
        let id = driver.id();
        let mut drivers = self.drivers.write().await;
        drivers.insert(id.to_string(), driver);
        tracing::info!(driver = id, "registered driver");
    }

    /// Get a driver by id
    pub async fn get_driver(&self, id: &str) -> Result<Arc<dyn DatabaseDriver>, DriverError> {
        let drivers = self.drivers.read().await;
        drivers
            .get(id)
            .cloned()
            .ok_or_else(|| DriverError::DriverNotFound(id.to_string()))
    }

    /// Get all registered driver ids
    pub async fn driver_ids(&self) -> Vec<String> {
        let drivers = self.drivers.read().await;
        drivers.keys().cloned().collect()
    }

    /// Check if a driver is registered for a given id
    pub async fn has_driver(&self, id: &str) -> bool {
        let drivers = self.drivers.read().await;
        drivers.contains_key(id)
    }

    /// Remove a driver (useful for testing or dynamic unloading)
    pub async fn unregister(&self, id: &str) {
        let mut drivers = self.drivers.write().await;
        drivers.remove(id);
        tracing::info!(driver = id, "unregistered driver");
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

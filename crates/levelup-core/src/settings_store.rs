//! Host settings store trait
//!
//! The `SettingsStore` trait abstracts the host platform's global
//! key/value settings storage, namespaced by component. The add-on's own
//! settings live under the `"levelup"` component; one legacy setting lives
//! under the host's `"core"` component (see `admin_config`).
//!
//! Absence is reported as `None` rather than a sentinel value, so a stored
//! boolean `false` is always distinguishable from "not set".

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::{ConfigMap, Result};

/// Host settings storage
///
/// Implementations:
/// - `MemorySettingsStore`: in-memory (tests, embedding without a database)
/// - `PgSettingsStore`: PostgreSQL (in `levelup-config-postgres`)
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a single setting, `None` when no value is stored.
    async fn read(&self, component: &str, name: &str) -> Result<Option<Value>>;

    /// Read every stored setting under a component.
    async fn read_all(&self, component: &str) -> Result<ConfigMap>;

    /// Write a single setting, replacing any stored value.
    async fn write(&self, component: &str, name: &str, value: Value) -> Result<()>;
}

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    components: RwLock<BTreeMap<String, ConfigMap>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<String, ConfigMap>> {
        // A poisoned lock only happens after a panic while writing a plain
        // map; the data is still consistent.
        self.components
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<String, ConfigMap>> {
        self.components
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn read(&self, component: &str, name: &str) -> Result<Option<Value>> {
        Ok(self
            .lock_read()
            .get(component)
            .and_then(|settings| settings.get(name))
            .cloned())
    }

    async fn read_all(&self, component: &str) -> Result<ConfigMap> {
        Ok(self.lock_read().get(component).cloned().unwrap_or_default())
    }

    async fn write(&self, component: &str, name: &str, value: Value) -> Result<()> {
        self.lock_write()
            .entry(component.to_string())
            .or_default()
            .insert(name.to_string(), value);
        Ok(())
    }
}

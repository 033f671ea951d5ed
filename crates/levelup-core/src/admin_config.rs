//! Administrative (site-wide) config adapter
//!
//! Note that the host platform's generated settings page may not reflect
//! the values returned by this adapter: the page does not fall back on the
//! defaults when values are not set, but we do.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::{Config, ConfigMap, Error, Result, settings_store::SettingsStore};

/// Component under which the add-on's settings are stored.
pub const PLUGIN_COMPONENT: &str = "levelup";
/// The host platform's own component.
pub const CORE_COMPONENT: &str = "core";

/// Storage key of the legacy `context` setting under the core component.
const LEGACY_CONTEXT_KEY: &str = "levelup_context";

/// Site-wide settings over the host settings store.
///
/// The defaults provider is the authority on which setting names exist,
/// and supplies the value whenever the store has none. The store can be
/// missing values in normal operation, e.g. right after an upgrade before
/// an admin has saved the settings page.
pub struct AdminConfig {
    store: Arc<dyn SettingsStore>,
    defaults: Arc<dyn Config>,
}

impl AdminConfig {
    pub fn new(store: Arc<dyn SettingsStore>, defaults: Arc<dyn Config>) -> Self {
        Self { store, defaults }
    }

    /// Map a setting name to its storage component and key.
    ///
    /// Legacy hack: `context` predates the add-on's own settings namespace
    /// and still lives under the core component with a prefixed key.
    fn storage_location(name: &str) -> (&'static str, &str) {
        if name == "context" {
            (CORE_COMPONENT, LEGACY_CONTEXT_KEY)
        } else {
            (PLUGIN_COMPONENT, name)
        }
    }

    async fn validate(&self, name: &str) -> Result<()> {
        if !self.defaults.has(name).await {
            return Err(Error::UnknownSetting(name.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Config for AdminConfig {
    async fn get(&self, name: &str) -> Result<Value> {
        self.validate(name).await?;

        let (component, key) = Self::storage_location(name);
        match self.store.read(component, key).await? {
            Some(value) => Ok(value),
            None => self.defaults.get(name).await,
        }
    }

    async fn get_all(&self) -> Result<ConfigMap> {
        let mut stored = self.store.read_all(PLUGIN_COMPONENT).await?;
        if let Some(context) = self.store.read(CORE_COMPONENT, LEGACY_CONTEXT_KEY).await? {
            stored.insert("context".to_string(), context);
        }

        // Overlay the stored values onto the full default map, discarding
        // anything the defaults do not recognize, e.g. stale keys left
        // behind by older versions.
        let mut all = self.defaults.get_all().await?;
        for (name, value) in stored {
            if all.contains_key(&name) {
                all.insert(name, value);
            }
        }
        Ok(all)
    }

    async fn has(&self, name: &str) -> bool {
        self.defaults.has(name).await
    }

    async fn set(&self, name: &str, value: Value) -> Result<()> {
        self.validate(name).await?;

        let (component, key) = Self::storage_location(name);
        debug!("Writing setting {}/{}", component, key);
        self.store.write(component, key, value).await
    }

    async fn set_many(&self, values: ConfigMap) -> Result<()> {
        for (name, value) in values {
            self.set(&name, value).await?;
        }
        Ok(())
    }
}

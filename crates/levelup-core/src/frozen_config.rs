//! Read-only config wrapper

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::{Config, ConfigMap, Error, Result};

/// Read-only view of another provider.
///
/// Used when a provider is handed to lower-precedence code as a defaults
/// source: reads pass through, writes fail loudly instead of mutating the
/// wrapped provider or silently doing nothing.
pub struct FrozenConfig {
    inner: Arc<dyn Config>,
}

impl FrozenConfig {
    pub fn new(inner: Arc<dyn Config>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Config for FrozenConfig {
    async fn get(&self, name: &str) -> Result<Value> {
        self.inner.get(name).await
    }

    async fn get_all(&self) -> Result<ConfigMap> {
        self.inner.get_all().await
    }

    async fn has(&self, name: &str) -> bool {
        self.inner.has(name).await
    }

    async fn set(&self, name: &str, _value: Value) -> Result<()> {
        Err(Error::ReadOnly(format!(
            "Frozen config cannot be written to: {}",
            name
        )))
    }

    async fn set_many(&self, _values: ConfigMap) -> Result<()> {
        Err(Error::ReadOnly(
            "Frozen config cannot be written to".to_string(),
        ))
    }
}

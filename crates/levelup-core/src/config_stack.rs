//! Ordered stack of config providers
//!
//! Lookups try the layers in construction order and the first layer that
//! knows the name wins, for both presence and value. The construction
//! order is therefore the precedence contract.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::{Config, ConfigMap, Error, Result};

/// First-match-wins composition of providers.
///
/// The stack is a read-only defaults source: writes are rejected rather
/// than routed to a layer, so a write aimed at a specific store cannot
/// land somewhere else by accident.
pub struct ConfigStack {
    layers: Vec<Arc<dyn Config>>,
}

impl ConfigStack {
    pub fn new(layers: Vec<Arc<dyn Config>>) -> Self {
        Self { layers }
    }
}

#[async_trait]
impl Config for ConfigStack {
    async fn get(&self, name: &str) -> Result<Value> {
        for layer in &self.layers {
            if layer.has(name).await {
                return layer.get(name).await;
            }
        }
        Err(Error::UnknownSetting(name.to_string()))
    }

    async fn get_all(&self) -> Result<ConfigMap> {
        // Later layers first so earlier ones override on shared keys.
        let mut all = ConfigMap::new();
        for layer in self.layers.iter().rev() {
            all.extend(layer.get_all().await?);
        }
        Ok(all)
    }

    async fn has(&self, name: &str) -> bool {
        for layer in &self.layers {
            if layer.has(name).await {
                return true;
            }
        }
        false
    }

    async fn set(&self, name: &str, _value: Value) -> Result<()> {
        Err(Error::ReadOnly(format!(
            "Config stack cannot be written to: {}",
            name
        )))
    }

    async fn set_many(&self, _values: ConfigMap) -> Result<()> {
        Err(Error::ReadOnly(
            "Config stack cannot be written to".to_string(),
        ))
    }
}

//! Static map-backed config
//!
//! An immutable provider over a fixed map of values, used for the
//! hard-coded default sets in `defaults`.

use async_trait::async_trait;
use serde_json::Value;

use crate::{Config, ConfigMap, Error, Result};

/// Immutable config over a fixed map.
///
/// The map given at construction is the complete key set: `get` on any
/// other name fails, and writes are always rejected.
#[derive(Debug, Clone)]
pub struct StaticConfig {
    values: ConfigMap,
}

impl StaticConfig {
    pub fn new(values: ConfigMap) -> Self {
        Self { values }
    }
}

#[async_trait]
impl Config for StaticConfig {
    async fn get(&self, name: &str) -> Result<Value> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownSetting(name.to_string()))
    }

    async fn get_all(&self) -> Result<ConfigMap> {
        Ok(self.values.clone())
    }

    async fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    async fn set(&self, name: &str, _value: Value) -> Result<()> {
        Err(Error::ReadOnly(format!(
            "Static config cannot be changed: {}",
            name
        )))
    }

    async fn set_many(&self, _values: ConfigMap) -> Result<()> {
        Err(Error::ReadOnly("Static config cannot be changed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> StaticConfig {
        let mut values = ConfigMap::new();
        values.insert("levels".to_string(), json!(10));
        values.insert("enabled".to_string(), json!(false));
        StaticConfig::new(values)
    }

    #[tokio::test]
    async fn test_get_known_key() {
        let config = sample();
        assert_eq!(config.get("levels").await.unwrap(), json!(10));
        assert_eq!(config.get("enabled").await.unwrap(), json!(false));
    }

    #[tokio::test]
    async fn test_get_unknown_key() {
        let config = sample();
        let err = config.get("nope").await.unwrap_err();
        assert!(matches!(err, Error::UnknownSetting(_)));
    }

    #[tokio::test]
    async fn test_has() {
        let config = sample();
        assert!(config.has("levels").await);
        assert!(!config.has("nope").await);
    }

    #[tokio::test]
    async fn test_writes_rejected() {
        let config = sample();
        let err = config.set("levels", json!(5)).await.unwrap_err();
        assert!(matches!(err, Error::ReadOnly(_)));

        let mut values = ConfigMap::new();
        values.insert("levels".to_string(), json!(5));
        let err = config.set_many(values).await.unwrap_err();
        assert!(matches!(err, Error::ReadOnly(_)));

        // Value unchanged.
        assert_eq!(config.get("levels").await.unwrap(), json!(10));
    }
}

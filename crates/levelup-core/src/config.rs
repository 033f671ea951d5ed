//! Config provider trait
//!
//! The `Config` trait is the capability every configuration adapter in the
//! add-on exposes, whether it is backed by the host settings store, a
//! database table, a static map, or a composition of other providers.
//! A provider used purely as a fallback source is called a default
//! provider; it is also the authority on which setting names are known.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::Result;

/// Map of setting names to values.
///
/// `BTreeMap` keeps iteration deterministic, which is the order
/// `set_many` applies its writes in.
pub type ConfigMap = BTreeMap<String, Value>;

/// Configuration provider
///
/// Implementations:
/// - `AdminConfig`: site-wide settings over the host settings store
/// - `TableRowConfig`: per-course settings over a database table
/// - `StaticConfig`, `ConfigStack`, `FrozenConfig`: in-memory combinators
///
/// # Example
/// ```no_run
/// # async fn example(config: &dyn levelup_core::Config) -> levelup_core::Result<()> {
/// let levels = config.get("levels").await?;
/// let everything = config.get_all().await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Config: Send + Sync {
    /// Get a value.
    ///
    /// A missing stored value is not an error: it resolves through the
    /// provider's defaults.
    ///
    /// # Errors
    /// - `Error::UnknownSetting` if the name is not a known setting
    /// - `Error::Database` for storage errors
    async fn get(&self, name: &str) -> Result<Value>;

    /// Get all values.
    ///
    /// Returns every known setting name, whether or not the backing store
    /// holds a value for it yet.
    async fn get_all(&self) -> Result<ConfigMap>;

    /// Whether the setting name is known.
    async fn has(&self, name: &str) -> bool;

    /// Set a value.
    ///
    /// # Errors
    /// - `Error::UnknownSetting` if the name is not a known setting
    /// - `Error::ReadOnly` if this provider forbids writes
    /// - `Error::Database` for storage errors
    async fn set(&self, name: &str, value: Value) -> Result<()>;

    /// Set many values, one write per entry in map order.
    ///
    /// Not atomic: a failure partway through leaves prior writes committed.
    async fn set_many(&self, values: ConfigMap) -> Result<()>;
}

/// Coerce a stored value to an integer.
///
/// The storage layer may hand back numbers or numeric strings depending on
/// how the value was written; both are accepted.
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_int_number() {
        assert_eq!(as_int(&json!(42)), Some(42));
        assert_eq!(as_int(&json!(-3)), Some(-3));
    }

    #[test]
    fn test_as_int_numeric_string() {
        assert_eq!(as_int(&json!("10")), Some(10));
        assert_eq!(as_int(&json!(" 7 ")), Some(7));
    }

    #[test]
    fn test_as_int_rejects_non_numeric() {
        assert_eq!(as_int(&json!("ten")), None);
        assert_eq!(as_int(&json!(true)), None);
        assert_eq!(as_int(&json!(null)), None);
        assert_eq!(as_int(&json!(1.5)), None);
    }
}

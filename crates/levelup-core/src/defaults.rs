//! Hard-coded default settings and domain constants
//!
//! Two default sets exist: the site-wide administrative defaults and the
//! per-course defaults. They share most keys; the shared keys must mean
//! the same thing in both scopes, since the course defaults sit below a
//! frozen snapshot of the admin config in a stack.

use serde_json::json;

use crate::{ConfigMap, static_config::StaticConfig};

/// No ranking.
pub const RANK_OFF: i64 = 0;
/// Ranking enabled.
pub const RANK_ON: i64 = 1;
/// Relative ranking, as a points difference to a point of reference.
pub const RANK_REL: i64 = 2;

/// Hide identity.
pub const IDENTITY_OFF: i64 = 0;
/// Identity displayed.
pub const IDENTITY_ON: i64 = 1;

/// Nothing to do about the default filters.
pub const DEFAULT_FILTERS_NOOP: i64 = 0;
/// Default filters are static and non-editable, a legacy v2.x state.
pub const DEFAULT_FILTERS_STATIC: i64 = 1;
/// Default filters have not been added yet.
pub const DEFAULT_FILTERS_MISSING: i64 = 2;

/// Host context level covering the whole site.
pub const CONTEXT_SYSTEM: i64 = 10;
/// Host context level for a single course.
pub const CONTEXT_COURSE: i64 = 50;

/// Course id of the platform's designated site course.
pub const SITE_COURSE_ID: i64 = 1;

fn shared_defaults() -> ConfigMap {
    let mut values = ConfigMap::new();
    values.insert("enableladder".to_string(), json!(true));
    values.insert("enableinfos".to_string(), json!(true));
    values.insert("enablelevelupnotif".to_string(), json!(true));
    values.insert("enablecheatguard".to_string(), json!(true));
    values.insert("enablelog".to_string(), json!(true));
    values.insert("keeplogs".to_string(), json!(3));
    values.insert("levels".to_string(), json!(10));
    values.insert("rankmode".to_string(), json!(RANK_ON));
    values.insert("identitymode".to_string(), json!(IDENTITY_ON));
    values.insert("neighbours".to_string(), json!(0));
    values.insert("timebetweensameactions".to_string(), json!(180));
    values.insert("maxactionspertime".to_string(), json!(10));
    values.insert(
        "defaultfilters".to_string(),
        json!(DEFAULT_FILTERS_MISSING),
    );
    values
}

/// Site-wide administrative defaults.
pub fn default_admin_config() -> StaticConfig {
    let mut values = shared_defaults();
    values.insert("context".to_string(), json!(CONTEXT_COURSE));
    StaticConfig::new(values)
}

/// Per-course defaults.
pub fn default_course_config() -> StaticConfig {
    let mut values = shared_defaults();
    values.insert("enabled".to_string(), json!(false));
    values.insert("levelsdata".to_string(), json!(""));
    values.insert("laddercols".to_string(), json!("xp,progress"));
    StaticConfig::new(values)
}

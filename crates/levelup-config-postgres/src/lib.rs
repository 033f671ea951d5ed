//! PostgreSQL-backed configuration storage for LevelUp
//!
//! This crate implements the storage side of the configuration layer:
//! - `PgSettingsStore`: the host settings store (`SettingsStore` trait),
//!   component/name rows with JSONB values
//! - `TableRowConfig`: the per-course row-backed config (`Config` trait),
//!   resolving missing keys through a defaults provider
//! - Automatic schema migrations
//!
//! # Example
//! ```no_run
//! # use levelup_config_postgres::PgSettingsStore;
//! # async fn example() -> levelup_core::Result<()> {
//! let store = PgSettingsStore::new("postgres://localhost/levelup").await?;
//! # Ok(())
//! # }
//! ```

mod migrations;
mod pg_settings_store;
mod table_row_config;

pub use migrations::run_migrations;
pub use pg_settings_store::PgSettingsStore;
pub use table_row_config::{COURSE_SETTINGS_TABLE, TableRowConfig};

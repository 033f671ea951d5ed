//! LevelUp configuration layer core types and traits
//!
//! This crate provides the building blocks of the layered configuration
//! resolution used by the LevelUp course add-on:
//! - The `Config` provider trait and the `SettingsStore` host-storage trait
//! - Pure combinators: static maps, ordered stacks, frozen wrappers
//! - The administrative (site-wide) config adapter
//! - Core error types

pub mod admin_config;
pub mod config;
pub mod config_stack;
pub mod defaults;
pub mod error;
pub mod frozen_config;
pub mod settings_store;
pub mod static_config;

pub use config::{Config, ConfigMap};
pub use error::{Error, Result};

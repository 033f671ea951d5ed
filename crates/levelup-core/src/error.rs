//! Error types for LevelUp Core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Read-only config: {0}")]
    ReadOnly(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, Error>;

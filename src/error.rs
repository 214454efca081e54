//! Error types for ACRE operations.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invalid accession expression: {0}")]
    InvalidExpression(String),

    #[error("Store not initialized at {0}")]
    NotInitialized(PathBuf),

    #[error("Store already initialized at {0}")]
    AlreadyInitialized(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;

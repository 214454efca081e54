//! Store initialization - creates the directory layout and database schema.

use std::fs;

use tracing::info;

use crate::{Config, Error, Result};

/// Initialize a new accession store.
///
/// Creates the directory structure, the DuckDB database with the catalog
/// schema, and saves the config.
pub fn initialize(config: &Config) -> Result<()> {
    // Check if already initialized
    if config.db_path().exists() {
        return Err(Error::AlreadyInitialized(config.store_root.clone()));
    }

    fs::create_dir_all(config.store_root.join("db"))?;
    init_database(config)?;
    config.save()?;

    info!(root = %config.store_root.display(), "accession store initialized");
    Ok(())
}

/// Create the catalog tables and the joined accession view.
///
/// The accessions table carries the three predicate columns under exactly
/// the names compiled predicates emit (prefixPart, numericPart, private);
/// empty prefixes and absent numeric parts are stored as NULL.
fn init_database(config: &Config) -> Result<()> {
    let conn = duckdb::Connection::open(config.db_path())?;

    conn.execute_batch(
        r#"
        CREATE TABLE logical_dbs (
            logical_db_key BIGINT PRIMARY KEY,
            name VARCHAR NOT NULL,
            description VARCHAR
        );
        CREATE TABLE object_types (
            object_type_key BIGINT PRIMARY KEY,
            name VARCHAR NOT NULL
        );
        CREATE TABLE accessions (
            acc_id VARCHAR NOT NULL,
            prefixPart VARCHAR,
            numericPart BIGINT,
            logical_db_key BIGINT,
            object_key BIGINT NOT NULL,
            object_type_key BIGINT,
            private INTEGER NOT NULL DEFAULT 0,
            preferred INTEGER NOT NULL DEFAULT 1
        );
        CREATE VIEW accession_view AS
            SELECT
                a.acc_id,
                a.prefixPart,
                a.numericPart,
                a.logical_db_key,
                d.name AS logical_db,
                a.object_key,
                a.object_type_key,
                t.name AS object_type,
                a.private,
                a.preferred
            FROM accessions a
            LEFT JOIN logical_dbs d ON a.logical_db_key = d.logical_db_key
            LEFT JOIN object_types t ON a.object_type_key = t.object_type_key;
        "#,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_database() {
        let tmp = TempDir::new().unwrap();
        let config = Config::with_root(tmp.path());

        initialize(&config).unwrap();

        assert!(config.db_path().exists());
        assert!(config.store_root.join("config.toml").exists());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let tmp = TempDir::new().unwrap();
        let config = Config::with_root(tmp.path());

        initialize(&config).unwrap();
        let result = initialize(&config);

        assert!(matches!(result, Err(Error::AlreadyInitialized(_))));
    }
}

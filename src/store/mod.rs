//! Store - writes and resolves accession records against the catalog.

mod registry;

use duckdb::{params, Connection};
use tracing::debug;

use crate::query::compile_query;
use crate::schema::{AccessionRecord, LogicalDb, ObjectType};
use crate::{Config, Error, Result};

pub use registry::{LogicalDbRegistry, ObjectTypeRegistry, Registry, RegistryEntry};

/// An accession store for writing and resolving accession records.
pub struct Store {
    config: Config,
}

impl Store {
    /// Open an existing accession store.
    pub fn open(config: Config) -> Result<Self> {
        if !config.db_path().exists() {
            return Err(Error::NotInitialized(config.store_root.clone()));
        }
        Ok(Self { config })
    }

    /// Get a DuckDB connection to the store.
    pub fn connection(&self) -> Result<Connection> {
        Ok(Connection::open(self.config.db_path())?)
    }

    /// Get config reference.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a logical database.
    pub fn write_logical_db(&self, db: &LogicalDb) -> Result<()> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO logical_dbs VALUES (?, ?, ?)",
            params![db.logical_db_key, db.name, db.description],
        )?;
        Ok(())
    }

    /// Register an object type.
    pub fn write_object_type(&self, ty: &ObjectType) -> Result<()> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO object_types VALUES (?, ?)",
            params![ty.object_type_key, ty.name],
        )?;
        Ok(())
    }

    /// Write an accession record.
    ///
    /// Empty prefixes and absent numeric parts are stored as NULL so the
    /// compiled predicates' `is null` tests line up with the data.
    pub fn write_accession(&self, record: &AccessionRecord) -> Result<()> {
        let conn = self.connection()?;
        let prefix = if record.prefix_part.is_empty() {
            None
        } else {
            Some(record.prefix_part.as_str())
        };
        conn.execute(
            "INSERT INTO accessions VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                record.acc_id,
                prefix,
                record.numeric_part,
                record.logical_db_key,
                record.object_key,
                record.object_type_key,
                record.private as i32,
                record.preferred as i32,
            ],
        )?;
        Ok(())
    }

    /// Count accession records in the store.
    pub fn accession_count(&self) -> Result<i64> {
        let conn = self.connection()?;
        let count = conn.query_row("SELECT COUNT(*) FROM accessions", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Resolve an accession ID to the distinct object keys it references.
    ///
    /// The match is filtered by object-type name when one is given,
    /// otherwise by object-type key when that is given, otherwise any type
    /// matches.
    pub fn object_keys(
        &self,
        acc_id: &str,
        object_type: Option<&str>,
        object_type_key: Option<i64>,
    ) -> Result<Vec<i64>> {
        let conn = self.connection()?;

        let mut sql = format!(
            "SELECT DISTINCT object_key FROM accession_view WHERE acc_id = '{}'",
            acc_id.replace('\'', "''")
        );
        if let Some(name) = object_type {
            sql.push_str(&format!(
                " AND object_type = '{}'",
                name.replace('\'', "''")
            ));
        } else if let Some(key) = object_type_key {
            sql.push_str(&format!(" AND object_type_key = {key}"));
        }
        sql.push_str(" ORDER BY object_key");

        debug!(acc_id, "resolving accession");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let mut keys = Vec::new();
        for key in rows {
            keys.push(key?);
        }
        Ok(keys)
    }

    /// Resolve an accession ID to a single object key.
    ///
    /// Returns None when the ID is unknown or resolves to more than one
    /// object.
    pub fn object_key(
        &self,
        acc_id: &str,
        object_type: Option<&str>,
        object_type_key: Option<i64>,
    ) -> Result<Option<i64>> {
        let keys = self.object_keys(acc_id, object_type, object_type_key)?;
        Ok(match keys.as_slice() {
            [key] => Some(*key),
            _ => None,
        })
    }

    /// Search accession records matching a query expression.
    ///
    /// The expression is compiled into a predicate over the accessions
    /// table; private records never match.
    pub fn search(&self, expr: &str) -> Result<Vec<AccessionRecord>> {
        let predicate = compile_query(expr, Some("a"))?;
        debug!(expr, %predicate, "searching accessions");

        let conn = self.connection()?;
        let sql = format!(
            "SELECT a.acc_id, a.prefixPart, a.numericPart, a.logical_db_key, \
             a.object_key, a.object_type_key, a.private, a.preferred \
             FROM accessions a WHERE {predicate} ORDER BY a.acc_id"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(AccessionRecord {
                acc_id: row.get(0)?,
                prefix_part: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                numeric_part: row.get(2)?,
                logical_db_key: row.get(3)?,
                object_key: row.get(4)?,
                object_type_key: row.get(5)?,
                private: row.get::<_, i32>(6)? != 0,
                preferred: row.get::<_, i32>(7)? != 0,
            })
        })?;
        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    /// Registry over the named logical databases.
    pub fn logical_dbs(&self) -> LogicalDbRegistry<'_> {
        LogicalDbRegistry::new(self)
    }

    /// Registry over the object types.
    pub fn object_types(&self) -> ObjectTypeRegistry<'_> {
        ObjectTypeRegistry::new(self)
    }

    /// Key of a logical database by name.
    pub fn logical_db_key(&self, name: &str) -> Result<Option<i64>> {
        Ok(self.logical_dbs().lookup_by_name(name)?.map(|e| e.key))
    }

    /// Key of an object type by name.
    pub fn object_type_key(&self, name: &str) -> Result<Option<i64>> {
        Ok(self.object_types().lookup_by_name(name)?.map(|e| e.key))
    }
}

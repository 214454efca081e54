//! Lookup registries for the reference tables.
//!
//! Logical databases and object types are small reference tables mirrored
//! from the catalog; the `Registry` trait gives callers one key/name lookup
//! surface over both, injected wherever resolution is needed.

use duckdb::params;

use crate::Result;

use super::Store;

/// One row of a reference registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub key: i64,
    pub name: String,
}

/// Key/name lookups over a reference table.
pub trait Registry {
    /// Entry with the given key, if present.
    fn lookup_by_key(&self, key: i64) -> Result<Option<RegistryEntry>>;

    /// Entry with the given name, if present. Names are case-sensitive.
    fn lookup_by_name(&self, name: &str) -> Result<Option<RegistryEntry>>;

    /// All entries, ordered by key.
    fn list_all(&self) -> Result<Vec<RegistryEntry>>;
}

/// Registry over the logical databases table.
pub struct LogicalDbRegistry<'a> {
    store: &'a Store,
}

impl<'a> LogicalDbRegistry<'a> {
    pub(crate) fn new(store: &'a Store) -> Self {
        Self { store }
    }
}

impl Registry for LogicalDbRegistry<'_> {
    fn lookup_by_key(&self, key: i64) -> Result<Option<RegistryEntry>> {
        lookup_by_key(self.store, "logical_dbs", "logical_db_key", key)
    }

    fn lookup_by_name(&self, name: &str) -> Result<Option<RegistryEntry>> {
        lookup_by_name(self.store, "logical_dbs", "logical_db_key", name)
    }

    fn list_all(&self) -> Result<Vec<RegistryEntry>> {
        list_all(self.store, "logical_dbs", "logical_db_key")
    }
}

/// Registry over the object types table.
pub struct ObjectTypeRegistry<'a> {
    store: &'a Store,
}

impl<'a> ObjectTypeRegistry<'a> {
    pub(crate) fn new(store: &'a Store) -> Self {
        Self { store }
    }
}

impl Registry for ObjectTypeRegistry<'_> {
    fn lookup_by_key(&self, key: i64) -> Result<Option<RegistryEntry>> {
        lookup_by_key(self.store, "object_types", "object_type_key", key)
    }

    fn lookup_by_name(&self, name: &str) -> Result<Option<RegistryEntry>> {
        lookup_by_name(self.store, "object_types", "object_type_key", name)
    }

    fn list_all(&self) -> Result<Vec<RegistryEntry>> {
        list_all(self.store, "object_types", "object_type_key")
    }
}

fn lookup_by_key(
    store: &Store,
    table: &str,
    key_col: &str,
    key: i64,
) -> Result<Option<RegistryEntry>> {
    let conn = store.connection()?;
    let sql = format!("SELECT {key_col}, name FROM {table} WHERE {key_col} = ?");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map(params![key], |row| {
        Ok(RegistryEntry {
            key: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.next().transpose().map_err(Into::into)
}

fn lookup_by_name(
    store: &Store,
    table: &str,
    key_col: &str,
    name: &str,
) -> Result<Option<RegistryEntry>> {
    let conn = store.connection()?;
    let sql = format!("SELECT {key_col}, name FROM {table} WHERE name = ?");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map(params![name], |row| {
        Ok(RegistryEntry {
            key: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.next().transpose().map_err(Into::into)
}

fn list_all(store: &Store, table: &str, key_col: &str) -> Result<Vec<RegistryEntry>> {
    let conn = store.connection()?;
    let sql = format!("SELECT {key_col}, name FROM {table} ORDER BY {key_col}");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(RegistryEntry {
            key: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    let mut entries = Vec::new();
    for entry in rows {
        entries.push(entry?);
    }
    Ok(entries)
}

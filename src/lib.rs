//! ACRE: Accession Catalog Resolution Engine
//!
//! Query layer for catalog accession identifiers: parses accession query
//! expressions into structured selections, compiles them into SQL filter
//! predicates, and resolves accession records against a DuckDB store.

pub mod accession;
pub mod config;
pub mod error;
pub mod init;
pub mod query;
pub mod schema;
pub mod store;

pub use accession::{split_accession, AccessionToken};
pub use config::Config;
pub use error::{Error, Result};
pub use query::{compile_parsed, compile_query, parse_query, NumericSpec, Query};
pub use schema::{AccessionRecord, LogicalDb, ObjectType};
pub use store::{Registry, RegistryEntry, Store};

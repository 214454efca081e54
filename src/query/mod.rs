//! Accession query expressions and their SQL compilation.
//!
//! # Syntax Overview
//!
//! - **Single ID**: `MGI:123` (prefix + number)
//! - **Number list**: `MGI:123+456` (several numbers under one prefix)
//! - **Range**: `J:1000..2000` (inclusive)
//! - **Segments**: `J:1000..2000,MGI:12345` (independent, comma-separated)
//!
//! Tails chain freely: `J:123+345..350+355` selects `123`, the range
//! `345..350` and `355` under `J:`.

mod parser;
mod predicate;

pub use parser::{parse_query, NumericSpec, Query};
pub use predicate::{compile_parsed, compile_query};

#[cfg(test)]
mod tests;

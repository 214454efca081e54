//! Compiles parsed accession queries into SQL filter predicates.

use super::parser::{parse_query, NumericSpec, Query};
use crate::Result;

/// Compile an accession query expression into a boolean SQL predicate.
///
/// The predicate tests the `prefixPart`, `numericPart` and `private`
/// columns, each qualified by `table` when one is given, and always
/// restricts to non-private records. It is returned as text ready to be
/// embedded verbatim in a WHERE clause.
///
/// A parse failure is returned unchanged; compilation itself never fails.
pub fn compile_query(expr: &str, table: Option<&str>) -> Result<String> {
    let query = parse_query(expr)?;
    Ok(compile_parsed(&query, table))
}

/// Compile an already-parsed query into a boolean SQL predicate.
///
/// Per prefix group: a lone number compiles to an equality test, several
/// numbers to an `in (...)` list in input order, and a group with no plain
/// numbers to a `numericPart is null` test. Every range gets its own
/// `between` clause and is never folded into the `in (...)` list. An empty
/// prefix is matched with `prefixPart is null`.
pub fn compile_parsed(query: &Query, table: Option<&str>) -> String {
    let col = match table {
        Some(table) => format!("{table}."),
        None => String::new(),
    };

    let mut clauses = Vec::new();
    for (prefix, numbers) in query.groups() {
        let prefix_test = if prefix.is_empty() {
            format!("{col}prefixPart is null")
        } else {
            format!("{col}prefixPart='{}'", prefix.replace('\'', "''"))
        };

        let mut singles = Vec::new();
        let mut ranges = Vec::new();
        for number in numbers {
            match number {
                Some(NumericSpec::Single(value)) => singles.push(*value),
                Some(NumericSpec::Range(low, high)) => ranges.push((*low, *high)),
                None => {}
            }
        }

        match singles.as_slice() {
            [] => clauses.push(format!("({prefix_test} and {col}numericPart is null)")),
            [value] => clauses.push(format!("({prefix_test} and {col}numericPart={value})")),
            values => {
                let list = values
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                clauses.push(format!("({prefix_test} and {col}numericPart in ({list}))"));
            }
        }
        for (low, high) in ranges {
            clauses.push(format!(
                "({prefix_test} and {col}numericPart between {low} and {high})"
            ));
        }
    }

    format!("({}) and {col}private = 0", clauses.join(" or "))
}

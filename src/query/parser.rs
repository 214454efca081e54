//! Parser for accession query expressions.

use std::fmt;

use crate::accession::split_accession;
use crate::{Error, Result};

/// A numeric selection recorded under a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSpec {
    /// One exact number.
    Single(u64),
    /// An inclusive number range.
    Range(u64, u64),
}

/// A parsed accession query expression.
///
/// Groups are keyed by prefix in order of first appearance; the numbers
/// recorded under a prefix keep their left-to-right input order. A `None`
/// element records a token that had no numeric part (a bare prefix).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    groups: Vec<(String, Vec<Option<NumericSpec>>)>,
}

impl Query {
    /// Whether the query contains no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in order of first appearance.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Option<NumericSpec>])> {
        self.groups
            .iter()
            .map(|(prefix, numbers)| (prefix.as_str(), numbers.as_slice()))
    }

    /// The numbers recorded under a prefix, if the prefix occurs.
    pub fn numbers(&self, prefix: &str) -> Option<&[Option<NumericSpec>]> {
        self.groups
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, numbers)| numbers.as_slice())
    }

    /// Mutable number list for a prefix, inserted on first use.
    fn numbers_mut(&mut self, prefix: &str) -> &mut Vec<Option<NumericSpec>> {
        let idx = match self.groups.iter().position(|(p, _)| p == prefix) {
            Some(idx) => idx,
            None => {
                self.groups.push((prefix.to_string(), Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }
}

impl fmt::Display for Query {
    /// Render a textual expression that parses back to an equal query.
    ///
    /// Each group becomes one comma segment (`A1+2..5`); a bare-prefix
    /// element after the segment head cannot be expressed inline, so it
    /// opens an extra segment of its own.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_any = false;
        for (prefix, numbers) in self.groups() {
            let mut in_segment = false;
            for number in numbers {
                match number {
                    None => {
                        if wrote_any {
                            f.write_str(",")?;
                        }
                        f.write_str(prefix)?;
                        wrote_any = true;
                        in_segment = true;
                    }
                    Some(spec) => {
                        if !in_segment {
                            if wrote_any {
                                f.write_str(",")?;
                            }
                            f.write_str(prefix)?;
                            wrote_any = true;
                            in_segment = true;
                        } else {
                            f.write_str("+")?;
                        }
                        match spec {
                            NumericSpec::Single(n) => write!(f, "{n}")?,
                            NumericSpec::Range(lo, hi) => write!(f, "{lo}..{hi}")?,
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Parse an accession query expression.
///
/// Comma-separated segments accumulate into one query. Within a segment,
/// `+` appends another number under the segment's prefix and `..` turns the
/// previous number into an inclusive range. A malformed segment fails the
/// whole parse; nothing partial is ever returned.
pub fn parse_query(input: &str) -> Result<Query> {
    let mut query = Query::default();
    for segment in input.split(',') {
        parse_segment(segment, &mut query)?;
    }
    Ok(query)
}

/// Parse one comma-delimited segment into the accumulator.
fn parse_segment(segment: &str, query: &mut Query) -> Result<()> {
    let (head, tail) = segment.split_at(head_end(segment));
    let token = split_accession(head);
    let numbers = query.numbers_mut(&token.prefix);
    numbers.push(token.numeric.map(NumericSpec::Single));

    let mut remaining = tail;
    while !remaining.is_empty() {
        if let Some(rest) = remaining.strip_prefix("..") {
            let (high, rest) = take_number(rest, "..")?;
            // The range low bound is the number recorded just before it.
            let low = match numbers.pop() {
                Some(Some(NumericSpec::Single(low))) => low,
                _ => {
                    return Err(Error::InvalidExpression(
                        "'..' must follow a plain number".to_string(),
                    ))
                }
            };
            numbers.push(Some(NumericSpec::Range(low, high)));
            remaining = rest;
        } else if let Some(rest) = remaining.strip_prefix('+') {
            let (value, rest) = take_number(rest, "+")?;
            numbers.push(Some(NumericSpec::Single(value)));
            remaining = rest;
        } else {
            return Err(Error::InvalidExpression(format!(
                "unexpected {:?} in segment {:?}",
                remaining, segment
            )));
        }
    }
    Ok(())
}

/// End of the leading simple token: the earlier of the first `+` and the
/// first `..`, or the whole segment when neither occurs.
fn head_end(segment: &str) -> usize {
    match (segment.find('+'), segment.find("..")) {
        (Some(plus), Some(dots)) => plus.min(dots),
        (Some(plus), None) => plus,
        (None, Some(dots)) => dots,
        (None, None) => segment.len(),
    }
}

/// Consume a run of decimal digits from the front of `input`.
fn take_number<'a>(input: &'a str, after: &str) -> Result<(u64, &'a str)> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return Err(Error::InvalidExpression(format!(
            "expected a number after '{after}'"
        )));
    }
    let value = input[..end].parse().map_err(|_| {
        Error::InvalidExpression(format!("number {:?} is out of range", &input[..end]))
    })?;
    Ok((value, &input[end..]))
}

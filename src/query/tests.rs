//! Tests for the accession expression parser.

use super::*;
use crate::Error;
use super::NumericSpec::{Range, Single};

#[test]
fn test_single_accession() {
    let q = parse_query("MGI:123").unwrap();
    assert_eq!(q.numbers("MGI:"), Some(&[Some(Single(123))][..]));
    assert_eq!(q.groups().count(), 1);
}

#[test]
fn test_bare_number() {
    let q = parse_query("123").unwrap();
    assert_eq!(q.numbers(""), Some(&[Some(Single(123))][..]));
}

#[test]
fn test_bare_prefix() {
    let q = parse_query("FOO").unwrap();
    assert_eq!(q.numbers("FOO"), Some(&[None][..]));
}

#[test]
fn test_empty_expression() {
    // An empty expression is one empty segment: a bare empty prefix.
    let q = parse_query("").unwrap();
    assert_eq!(q.numbers(""), Some(&[None][..]));
    assert_eq!(q.groups().count(), 1);
}

#[test]
fn test_range() {
    let q = parse_query("J:1000..2000").unwrap();
    assert_eq!(q.numbers("J:"), Some(&[Some(Range(1000, 2000))][..]));
}

#[test]
fn test_reversed_range_is_accepted() {
    // Bounds are recorded as written; no low <= high check.
    let q = parse_query("J:9..3").unwrap();
    assert_eq!(q.numbers("J:"), Some(&[Some(Range(9, 3))][..]));
}

#[test]
fn test_plus_list() {
    let q = parse_query("A1+2+3").unwrap();
    assert_eq!(
        q.numbers("A"),
        Some(&[Some(Single(1)), Some(Single(2)), Some(Single(3))][..])
    );
}

#[test]
fn test_chained_tails() {
    let q = parse_query("J:123+345..350+355").unwrap();
    assert_eq!(
        q.numbers("J:"),
        Some(&[Some(Single(123)), Some(Range(345, 350)), Some(Single(355))][..])
    );
}

#[test]
fn test_range_after_plus() {
    let q = parse_query("A1+2..5").unwrap();
    assert_eq!(q.numbers("A"), Some(&[Some(Single(1)), Some(Range(2, 5))][..]));
}

#[test]
fn test_plus_after_bare_prefix() {
    let q = parse_query("MGI:+5").unwrap();
    assert_eq!(q.numbers("MGI:"), Some(&[None, Some(Single(5))][..]));
}

#[test]
fn test_multiple_segments() {
    let q = parse_query("J:1000..2000,MGI:12345").unwrap();
    assert_eq!(q.numbers("J:"), Some(&[Some(Range(1000, 2000))][..]));
    assert_eq!(q.numbers("MGI:"), Some(&[Some(Single(12345))][..]));
    assert_eq!(q.groups().count(), 2);
}

#[test]
fn test_same_prefix_accumulates() {
    let q = parse_query("MGI:1,MGI:2").unwrap();
    assert_eq!(q.numbers("MGI:"), Some(&[Some(Single(1)), Some(Single(2))][..]));
    assert_eq!(q.groups().count(), 1);
}

#[test]
fn test_groups_keep_first_appearance_order() {
    let q = parse_query("B:1,A:2,B:3").unwrap();
    let prefixes: Vec<&str> = q.groups().map(|(prefix, _)| prefix).collect();
    assert_eq!(prefixes, vec!["B:", "A:"]);
}

#[test]
fn test_err_range_after_bare_prefix() {
    assert!(matches!(
        parse_query("FOO..5"),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn test_err_missing_number_after_range() {
    assert!(matches!(
        parse_query("FOO.."),
        Err(Error::InvalidExpression(_))
    ));
    assert!(matches!(
        parse_query("MGI:1.."),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn test_err_missing_number_after_plus() {
    assert!(matches!(
        parse_query("MGI:1+"),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn test_err_range_after_range() {
    assert!(matches!(
        parse_query("A1..2..3"),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn test_err_trailing_junk_after_number() {
    assert!(matches!(
        parse_query("A1+2x"),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn test_err_discards_earlier_segments() {
    // A bad segment fails the whole parse even after good ones.
    assert!(matches!(
        parse_query("MGI:1,J:2,FOO.."),
        Err(Error::InvalidExpression(_))
    ));
}

#[test]
fn test_display_single_segment() {
    let q = parse_query("J:123+345..350+355").unwrap();
    assert_eq!(q.to_string(), "J:123+345..350+355");
}

#[test]
fn test_display_splits_trailing_bare_prefix() {
    // A bare prefix recorded after numbers needs its own segment.
    let q = parse_query("A1,A").unwrap();
    assert_eq!(q.to_string(), "A1,A");
}

#[test]
fn test_display_round_trip() {
    for expr in [
        "MGI:123",
        "J:1000..2000",
        "A1+2+3",
        "J:123+345..350+355,MGI:9",
        "FOO",
        "MGI:+5",
        "B:1,A:2,B:3",
        "123",
    ] {
        let q = parse_query(expr).unwrap();
        let reparsed = parse_query(&q.to_string()).unwrap();
        assert_eq!(q, reparsed, "round trip failed for {expr:?}");
    }
}

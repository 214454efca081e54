//! Accession ID splitting.

/// An accession ID split into its textual and numeric parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessionToken {
    /// Everything before the trailing digit run (may be empty).
    pub prefix: String,
    /// The trailing digit run, or `None` when the ID ends in a non-digit.
    pub numeric: Option<u64>,
}

/// Split an accession ID into its prefix and numeric parts.
///
/// The numeric part is the longest run of decimal digits at the end of the
/// ID: `"J:1000"` splits into `"J:"` and `1000`, `"123"` into `""` and
/// `123`, and `"FOO"` has no numeric part. Digits elsewhere in the ID stay
/// in the prefix.
pub fn split_accession(token: &str) -> AccessionToken {
    let prefix_len = token.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let (prefix, digits) = token.split_at(prefix_len);
    AccessionToken {
        prefix: prefix.to_string(),
        numeric: digits.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix_and_number() {
        let token = split_accession("MGI:123");
        assert_eq!(token.prefix, "MGI:");
        assert_eq!(token.numeric, Some(123));
    }

    #[test]
    fn test_split_number_only() {
        let token = split_accession("123");
        assert_eq!(token.prefix, "");
        assert_eq!(token.numeric, Some(123));
    }

    #[test]
    fn test_split_prefix_only() {
        let token = split_accession("FOO");
        assert_eq!(token.prefix, "FOO");
        assert_eq!(token.numeric, None);
    }

    #[test]
    fn test_split_empty() {
        let token = split_accession("");
        assert_eq!(token.prefix, "");
        assert_eq!(token.numeric, None);
    }

    #[test]
    fn test_split_takes_trailing_run_only() {
        // Digits embedded in the prefix are not part of the numeric tail.
        let token = split_accession("A1B2");
        assert_eq!(token.prefix, "A1B");
        assert_eq!(token.numeric, Some(2));
    }

    #[test]
    fn test_split_trailing_separator() {
        let token = split_accession("J:");
        assert_eq!(token.prefix, "J:");
        assert_eq!(token.numeric, None);
    }

    #[test]
    fn test_split_leading_zeros() {
        let token = split_accession("MGI:007");
        assert_eq!(token.prefix, "MGI:");
        assert_eq!(token.numeric, Some(7));
    }
}

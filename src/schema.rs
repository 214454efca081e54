//! Schema definitions for the catalog tables.

use serde::{Deserialize, Serialize};

use crate::accession::split_accession;

/// An accession record linking an external ID to a catalog object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessionRecord {
    /// The full accession ID as issued (e.g. "MGI:123").
    pub acc_id: String,

    /// Textual part of the ID (empty when the ID is all digits).
    pub prefix_part: String,

    /// Trailing numeric part of the ID, if any.
    pub numeric_part: Option<i64>,

    /// Which named database issued the ID.
    pub logical_db_key: i64,

    /// The catalog object the ID resolves to.
    pub object_key: i64,

    /// Type of the referenced object.
    pub object_type_key: i64,

    /// Hidden from public queries when set.
    pub private: bool,

    /// Whether this is the preferred ID for the object.
    pub preferred: bool,
}

impl AccessionRecord {
    /// Create a record for an accession ID, deriving its prefix and numeric
    /// parts from the ID itself.
    pub fn new(
        acc_id: impl Into<String>,
        logical_db_key: i64,
        object_key: i64,
        object_type_key: i64,
    ) -> Self {
        let acc_id = acc_id.into();
        let token = split_accession(&acc_id);
        Self {
            prefix_part: token.prefix,
            numeric_part: token.numeric.and_then(|n| i64::try_from(n).ok()),
            acc_id,
            logical_db_key,
            object_key,
            object_type_key,
            private: false,
            preferred: true,
        }
    }

    /// Hide the record from public queries.
    pub fn with_private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Mark whether this is the preferred ID for the object.
    pub fn with_preferred(mut self, preferred: bool) -> Self {
        self.preferred = preferred;
        self
    }
}

/// A named external database that issues accession IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalDb {
    pub logical_db_key: i64,
    pub name: String,
    pub description: Option<String>,
}

impl LogicalDb {
    /// Create a logical database entry.
    pub fn new(logical_db_key: i64, name: impl Into<String>) -> Self {
        Self {
            logical_db_key,
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A type of catalog object that accession IDs resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    pub object_type_key: i64,
    pub name: String,
}

impl ObjectType {
    /// Create an object type entry.
    pub fn new(object_type_key: i64, name: impl Into<String>) -> Self {
        Self {
            object_type_key,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_derives_parts() {
        let record = AccessionRecord::new("MGI:123", 1, 1001, 2);
        assert_eq!(record.prefix_part, "MGI:");
        assert_eq!(record.numeric_part, Some(123));
        assert!(!record.private);
        assert!(record.preferred);
    }

    #[test]
    fn test_record_all_digit_id() {
        let record = AccessionRecord::new("4500", 1, 1001, 2);
        assert_eq!(record.prefix_part, "");
        assert_eq!(record.numeric_part, Some(4500));
    }

    #[test]
    fn test_record_no_numeric_part() {
        let record = AccessionRecord::new("CLONE", 1, 1001, 2);
        assert_eq!(record.prefix_part, "CLONE");
        assert_eq!(record.numeric_part, None);
    }

    #[test]
    fn test_record_builders() {
        let record = AccessionRecord::new("MGI:5", 1, 1, 2)
            .with_private()
            .with_preferred(false);
        assert!(record.private);
        assert!(!record.preferred);
    }
}

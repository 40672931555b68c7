//! Changelog entry types

use serde::{Deserialize, Serialize};

/// A single changelog entry
///
/// The `timestamp` doubles as the entry's identity: it is assigned once at
/// creation time and never changes, and edit/delete look entries up by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// RFC 3339 creation timestamp, unique within the store
    pub timestamp: String,
    /// Classification of the logged change
    pub operation: Operation,
    /// Free-form description
    pub text: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        timestamp: impl Into<String>,
        operation: Operation,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            operation,
            text: text.into(),
        }
    }
}

/// Classification of the change a changelog entry describes.
///
/// Independent of what happens to the entry record itself - an entry whose
/// operation is `Deleted` logs that something was deleted, it is not itself
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Something was created
    Created,
    /// Something was changed
    Edited,
    /// Something was removed
    Deleted,
}

impl Operation {
    /// All operations, in the order the original form presented them
    pub const ALL: [Operation; 3] = [Self::Created, Self::Edited, Self::Deleted];

    /// Human-readable label, as stored in the document
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Edited => "Edited",
            Self::Deleted => "Deleted",
        }
    }

    /// Lowercase identifier used as a style class in reports
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "edited" => Ok(Self::Edited),
            "deleted" => Ok(Self::Deleted),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_from_str() {
        assert_eq!("created".parse::<Operation>().unwrap(), Operation::Created);
        assert_eq!("Edited".parse::<Operation>().unwrap(), Operation::Edited);
        assert_eq!("DELETED".parse::<Operation>().unwrap(), Operation::Deleted);
        assert!("renamed".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_serializes_as_label() {
        // The legacy document format stores the PascalCase label.
        let json = serde_json::to_string(&Operation::Created).unwrap();
        assert_eq!(json, "\"Created\"");

        let parsed: Operation = serde_json::from_str("\"Deleted\"").unwrap();
        assert_eq!(parsed, Operation::Deleted);
    }

    #[test]
    fn test_entry_field_layout() {
        let entry = Entry::new("2024-01-15T10:30:00+00:00", Operation::Edited, "Fixed typo");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            "{\"timestamp\":\"2024-01-15T10:30:00+00:00\",\"operation\":\"Edited\",\"text\":\"Fixed typo\"}"
        );
    }
}

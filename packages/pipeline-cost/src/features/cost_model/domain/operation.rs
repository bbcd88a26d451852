//! Operation categories and space quantity kinds

use serde::{Deserialize, Serialize};

/// Class of embedded-relevant arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationCategory {
    Add,
    Subtract,
    Multiply,
    Divide,
    Compare,
    SquareRoot,
    Exponential,
    Logarithm,
    /// sin, cos, atan, ...
    Trigonometric,
    Absolute,
    /// Memory writes / register moves
    Assign,
}

impl OperationCategory {
    /// Every category, in declaration order
    pub const ALL: [OperationCategory; 11] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Compare,
        Self::SquareRoot,
        Self::Exponential,
        Self::Logarithm,
        Self::Trigonometric,
        Self::Absolute,
        Self::Assign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Compare => "COMPARE",
            Self::SquareRoot => "SQUARE_ROOT",
            Self::Exponential => "EXPONENTIAL",
            Self::Logarithm => "LOGARITHM",
            Self::Trigonometric => "TRIGONOMETRIC",
            Self::Absolute => "ABSOLUTE",
            Self::Assign => "ASSIGN",
        }
    }
}

impl std::fmt::Display for OperationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage type of a space declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityKind {
    Integer,
    Float,
}

impl QuantityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for category in OperationCategory::ALL {
            assert!(seen.insert(category));
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for category in OperationCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert_eq!(
            serde_json::to_string(&QuantityKind::Float).unwrap(),
            "\"FLOAT\""
        );
    }
}

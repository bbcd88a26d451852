//! Symbolic multipliers
//!
//! A multiplier is a named scaling factor. The well-known names form a
//! closed vocabulary resolved against trained statistics; anything else is
//! an algorithm-specific name that only the owning algorithm's hook can
//! resolve.

use serde::{Deserialize, Serialize};

/// Concrete value of a resolved multiplier (may be negative)
pub type Factor = i64;

/// Multiplier name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MultiplierKind {
    Attributes,
    AttributesMinusOne,
    Classes,
    ClassesMinusOne,
    UserSelectedAttributes,
    Instances,
    LinesPerFeature,
    LinesPerFeatureMinusOne,
    /// n(n+1)/2 with n = lines per feature - 1
    GaussSumOfLinesPerFeatureMinusOne,
    Constant,
    /// Algorithm-specific name, resolvable only by an override hook
    Custom(String),
}

impl MultiplierKind {
    /// Parse a multiplier name. Unrecognized names become `Custom`.
    pub fn parse(name: &str) -> Self {
        match name {
            "ATTRIBUTES" => Self::Attributes,
            "ATTRIBUTES_MINUS_ONE" => Self::AttributesMinusOne,
            "CLASSES" => Self::Classes,
            "CLASSES_MINUS_ONE" => Self::ClassesMinusOne,
            "USER_SELECTED_ATTRIBUTES" => Self::UserSelectedAttributes,
            "INSTANCES" => Self::Instances,
            "LINES_PER_FEATURE" => Self::LinesPerFeature,
            "LINES_PER_FEATURE_MINUS_ONE" => Self::LinesPerFeatureMinusOne,
            "GAUSS_SUM_OF_LINES_PER_FEATURE_MINUS_ONE" => Self::GaussSumOfLinesPerFeatureMinusOne,
            "CONSTANT" => Self::Constant,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Attributes => "ATTRIBUTES",
            Self::AttributesMinusOne => "ATTRIBUTES_MINUS_ONE",
            Self::Classes => "CLASSES",
            Self::ClassesMinusOne => "CLASSES_MINUS_ONE",
            Self::UserSelectedAttributes => "USER_SELECTED_ATTRIBUTES",
            Self::Instances => "INSTANCES",
            Self::LinesPerFeature => "LINES_PER_FEATURE",
            Self::LinesPerFeatureMinusOne => "LINES_PER_FEATURE_MINUS_ONE",
            Self::GaussSumOfLinesPerFeatureMinusOne => "GAUSS_SUM_OF_LINES_PER_FEATURE_MINUS_ONE",
            Self::Constant => "CONSTANT",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for MultiplierKind {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for MultiplierKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<MultiplierKind> for String {
    fn from(kind: MultiplierKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for MultiplierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution state of one multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierState {
    Unresolved,
    Resolved(Factor),
}

/// Per-binding multiplier instance
///
/// Resolved at most once; the factor is cached for the lifetime of the
/// owning binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplier {
    kind: MultiplierKind,
    state: MultiplierState,
}

impl Multiplier {
    /// Create an unresolved multiplier
    pub fn new(kind: MultiplierKind) -> Self {
        Self {
            kind,
            state: MultiplierState::Unresolved,
        }
    }

    pub fn kind(&self) -> &MultiplierKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        self.kind.as_str()
    }

    /// Cached factor, if resolved
    pub fn factor(&self) -> Option<Factor> {
        match self.state {
            MultiplierState::Resolved(factor) => Some(factor),
            MultiplierState::Unresolved => None,
        }
    }

    /// Return the cached factor, or compute it once with `resolve` and cache it.
    ///
    /// `resolve` is not called when the multiplier is already resolved. On
    /// error the multiplier stays unresolved.
    pub fn get_or_resolve<E, F>(&mut self, resolve: F) -> Result<Factor, E>
    where
        F: FnOnce(&MultiplierKind) -> Result<Factor, E>,
    {
        if let MultiplierState::Resolved(factor) = self.state {
            return Ok(factor);
        }
        let factor = resolve(&self.kind)?;
        self.state = MultiplierState::Resolved(factor);
        Ok(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_known_names() {
        assert_eq!(MultiplierKind::parse("ATTRIBUTES"), MultiplierKind::Attributes);
        assert_eq!(
            MultiplierKind::parse("GAUSS_SUM_OF_LINES_PER_FEATURE_MINUS_ONE"),
            MultiplierKind::GaussSumOfLinesPerFeatureMinusOne
        );
        assert_eq!(MultiplierKind::parse("CONSTANT"), MultiplierKind::Constant);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            MultiplierKind::parse("attributes"),
            MultiplierKind::Custom("attributes".to_string())
        );
    }

    #[test]
    fn test_name_roundtrip_through_string() {
        for name in ["CLASSES_MINUS_ONE", "numberOfRecursions", "INSTANCES"] {
            let kind = MultiplierKind::parse(name);
            assert_eq!(kind.as_str(), name);
            assert_eq!(String::from(kind), name);
        }
    }

    #[test]
    fn test_get_or_resolve_memoizes() {
        let mut multiplier = Multiplier::new(MultiplierKind::Classes);
        assert_eq!(multiplier.factor(), None);

        let mut calls = 0;
        let first: Result<Factor, ()> = multiplier.get_or_resolve(|_| {
            calls += 1;
            Ok(3)
        });
        assert_eq!(first, Ok(3));

        let second: Result<Factor, ()> = multiplier.get_or_resolve(|_| {
            calls += 1;
            Ok(99)
        });
        assert_eq!(second, Ok(3));
        assert_eq!(calls, 1);
        assert_eq!(multiplier.factor(), Some(3));
    }

    #[test]
    fn test_failed_resolution_stays_unresolved() {
        let mut multiplier = Multiplier::new(MultiplierKind::parse("bogus"));
        let result: Result<Factor, &str> = multiplier.get_or_resolve(|_| Err("unknown"));
        assert!(result.is_err());
        assert_eq!(multiplier.factor(), None);
    }
}

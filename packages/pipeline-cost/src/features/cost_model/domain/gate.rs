//! Feature-dependency gates

use std::collections::BTreeSet;

/// Condition under which a binding contributes to totals
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeatureGate {
    /// No gate: always active
    #[default]
    Always,
    /// Active iff at least one of these features survived training
    AnyOf(BTreeSet<String>),
}

impl FeatureGate {
    pub fn any_of<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(features.into_iter().map(Into::into).collect())
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Evaluate against the trained feature-name set
    pub fn is_active(&self, trained_features: &BTreeSet<String>) -> bool {
        match self {
            Self::Always => true,
            Self::AnyOf(features) => !features.is_disjoint(trained_features),
        }
    }

    /// Gate features, if any
    pub fn features(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Always => None,
            Self::AnyOf(features) => Some(features),
        }
    }
}

//! Static cost declarations
//!
//! Authored once per algorithm type and shared read-only by every pipeline
//! that uses the algorithm.

use super::gate::FeatureGate;
use super::multiplier::MultiplierKind;
use super::operation::{OperationCategory, QuantityKind};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Anything that declares an ordered list of multiplier names
pub trait CostDeclaration {
    fn multiplier_kinds(&self) -> &[MultiplierKind];
}

/// Base operation counts per category, scaled by the declared multipliers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDeclaration {
    counts: BTreeMap<OperationCategory, u64>,
    multipliers: Vec<MultiplierKind>,
}

impl OperationDeclaration {
    pub fn new(
        counts: impl IntoIterator<Item = (OperationCategory, u64)>,
        multipliers: impl IntoIterator<Item = MultiplierKind>,
    ) -> Self {
        Self {
            counts: counts.into_iter().collect(),
            multipliers: multipliers.into_iter().collect(),
        }
    }

    /// Base count for `category` (0 when not declared)
    pub fn base_count(&self, category: OperationCategory) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<OperationCategory, u64> {
        &self.counts
    }

    /// True if at least one category has a non-zero count
    pub fn has_any_count(&self) -> bool {
        self.counts.values().any(|&count| count > 0)
    }
}

impl CostDeclaration for OperationDeclaration {
    fn multiplier_kinds(&self) -> &[MultiplierKind] {
        &self.multipliers
    }
}

/// Memory quantity: product of the declared multipliers, in words of `kind`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceDeclaration {
    kind: QuantityKind,
    multipliers: Vec<MultiplierKind>,
}

impl SpaceDeclaration {
    pub fn new(kind: QuantityKind, multipliers: impl IntoIterator<Item = MultiplierKind>) -> Self {
        Self {
            kind,
            multipliers: multipliers.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> QuantityKind {
        self.kind
    }
}

impl CostDeclaration for SpaceDeclaration {
    fn multiplier_kinds(&self) -> &[MultiplierKind] {
        &self.multipliers
    }
}

/// Catalog entry: a shared declaration plus the gate its bindings carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry<D> {
    pub declaration: Arc<D>,
    pub gate: FeatureGate,
}

impl<D> CatalogEntry<D> {
    pub fn new(declaration: D) -> Self {
        Self {
            declaration: Arc::new(declaration),
            gate: FeatureGate::Always,
        }
    }

    pub fn gated(declaration: D, gate: FeatureGate) -> Self {
        Self {
            declaration: Arc::new(declaration),
            gate,
        }
    }
}

pub type OperationEntry = CatalogEntry<OperationDeclaration>;
pub type SpaceEntry = CatalogEntry<SpaceDeclaration>;

/// All cost declarations of one algorithm type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmCostProfile {
    pub name: String,
    pub operations: Vec<OperationEntry>,
    pub spaces: Vec<SpaceEntry>,
}

impl AlgorithmCostProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
            spaces: Vec::new(),
        }
    }

    pub fn with_operation(mut self, entry: OperationEntry) -> Self {
        self.operations.push(entry);
        self
    }

    pub fn with_space(mut self, entry: SpaceEntry) -> Self {
        self.spaces.push(entry);
        self
    }
}

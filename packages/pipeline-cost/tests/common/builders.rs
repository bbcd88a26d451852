//! Test data builders

use pipeline_cost::features::cost_model::{
    AlgorithmCostProfile, FeatureGate, MultiplierKind, OperationCategory, OperationDeclaration,
    OperationEntry, QuantityKind, SpaceDeclaration, SpaceEntry,
};

/// Builder for AlgorithmCostProfile
#[derive(Debug)]
pub struct ProfileBuilder {
    profile: AlgorithmCostProfile,
}

impl ProfileBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            profile: AlgorithmCostProfile::new(name),
        }
    }

    /// Ungated operation entry
    pub fn operation(self, counts: &[(OperationCategory, u64)], multipliers: &[&str]) -> Self {
        self.gated_operation(counts, multipliers, None)
    }

    pub fn gated_operation(
        mut self,
        counts: &[(OperationCategory, u64)],
        multipliers: &[&str],
        gate: Option<&[&str]>,
    ) -> Self {
        let declaration = OperationDeclaration::new(counts.iter().copied(), kinds(multipliers));
        self.profile
            .operations
            .push(OperationEntry::gated(declaration, gate_of(gate)));
        self
    }

    /// Ungated space entry
    pub fn space(self, kind: QuantityKind, multipliers: &[&str]) -> Self {
        self.gated_space(kind, multipliers, None)
    }

    pub fn gated_space(
        mut self,
        kind: QuantityKind,
        multipliers: &[&str],
        gate: Option<&[&str]>,
    ) -> Self {
        let declaration = SpaceDeclaration::new(kind, kinds(multipliers));
        self.profile
            .spaces
            .push(SpaceEntry::gated(declaration, gate_of(gate)));
        self
    }

    pub fn build(self) -> AlgorithmCostProfile {
        self.profile
    }
}

fn kinds(names: &[&str]) -> Vec<MultiplierKind> {
    names.iter().copied().map(MultiplierKind::parse).collect()
}

fn gate_of(gate: Option<&[&str]>) -> FeatureGate {
    match gate {
        Some(features) => FeatureGate::any_of(features.iter().copied()),
        None => FeatureGate::Always,
    }
}

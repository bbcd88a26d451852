//! Per-pipeline bindings of static declarations

use super::declaration::{CostDeclaration, OperationDeclaration, SpaceDeclaration};
use super::gate::FeatureGate;
use super::multiplier::{Factor, Multiplier};
use std::collections::BTreeSet;
use std::sync::Arc;

/// One static declaration attached to fresh, independently resolvable
/// multipliers and an optional feature gate.
///
/// Invariant: `multipliers` mirrors the declaration's multiplier names,
/// same length, same order.
#[derive(Debug, Clone)]
pub struct Binding<D> {
    declaration: Arc<D>,
    multipliers: Vec<Multiplier>,
    gate: FeatureGate,
}

pub type OperationBinding = Binding<OperationDeclaration>;
pub type SpaceBinding = Binding<SpaceDeclaration>;

impl<D: CostDeclaration> Binding<D> {
    /// Create a binding with all multipliers unresolved
    pub fn new(declaration: Arc<D>, gate: FeatureGate) -> Self {
        let multipliers = declaration
            .multiplier_kinds()
            .iter()
            .cloned()
            .map(Multiplier::new)
            .collect();
        Self {
            declaration,
            multipliers,
            gate,
        }
    }

    pub fn declaration(&self) -> &D {
        &self.declaration
    }

    pub fn multipliers(&self) -> &[Multiplier] {
        &self.multipliers
    }

    pub(crate) fn multipliers_mut(&mut self) -> &mut [Multiplier] {
        &mut self.multipliers
    }

    pub fn gate(&self) -> &FeatureGate {
        &self.gate
    }

    pub fn is_active(&self, trained_features: &BTreeSet<String>) -> bool {
        self.gate.is_active(trained_features)
    }

    /// Cached factors in declaration order, `None` while any is unresolved
    pub fn resolved_factors(&self) -> Option<Vec<Factor>> {
        self.multipliers.iter().map(Multiplier::factor).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::cost_model::domain::{MultiplierKind, OperationCategory, QuantityKind};

    #[test]
    fn test_new_binding_mirrors_declaration() {
        let decl = Arc::new(OperationDeclaration::new(
            [(OperationCategory::Add, 2)],
            [MultiplierKind::Classes, MultiplierKind::parse("numberOfNodes")],
        ));
        let binding = OperationBinding::new(decl.clone(), FeatureGate::Always);

        assert_eq!(binding.multipliers().len(), 2);
        assert_eq!(binding.multipliers()[0].kind(), &MultiplierKind::Classes);
        assert_eq!(binding.multipliers()[1].name(), "numberOfNodes");
        assert_eq!(binding.resolved_factors(), None);
    }

    #[test]
    fn test_bindings_do_not_share_multipliers() {
        let decl = Arc::new(SpaceDeclaration::new(
            QuantityKind::Integer,
            [MultiplierKind::Attributes],
        ));
        let mut a = SpaceBinding::new(decl.clone(), FeatureGate::Always);
        let b = SpaceBinding::new(decl, FeatureGate::Always);

        let _ = a.multipliers_mut()[0].get_or_resolve(|_| Ok::<_, ()>(7));
        assert_eq!(a.resolved_factors(), Some(vec![7]));
        assert_eq!(b.resolved_factors(), None);
        assert!(std::ptr::eq(a.declaration(), b.declaration()));
    }

    #[test]
    fn test_empty_multiplier_list_is_resolved() {
        let decl = Arc::new(SpaceDeclaration::new(QuantityKind::Float, []));
        let binding = SpaceBinding::new(decl, FeatureGate::Always);
        assert_eq!(binding.resolved_factors(), Some(vec![]));
    }
}

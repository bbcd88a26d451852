//! Dynamic binding layer
//!
//! Materializes catalog entries into per-instance bindings and resolves
//! their multipliers: override hook first, generic table second.

use crate::errors::{CostError, CostResult};
use crate::features::cost_model::domain::{
    Binding, CatalogEntry, CostDeclaration, Factor, FeatureGate, TrainedStatistics,
};
use crate::features::cost_model::infrastructure::resolver::MultiplierResolver;
use crate::features::cost_model::ports::AlgorithmInstance;
use std::sync::Arc;

/// Create a binding with fresh, unresolved multipliers
pub fn bind<D: CostDeclaration>(declaration: Arc<D>, gate: FeatureGate) -> Binding<D> {
    Binding::new(declaration, gate)
}

/// Create a binding from a catalog entry, carrying the entry's gate
pub fn bind_entry<D: CostDeclaration>(entry: &CatalogEntry<D>) -> Binding<D> {
    bind(Arc::clone(&entry.declaration), entry.gate.clone())
}

/// Resolve every unresolved multiplier of `binding`
///
/// Idempotent: already resolved multipliers return their cached factor
/// without consulting the hook or the table again. Returns the factors in
/// declaration order.
pub fn resolve<D: CostDeclaration>(
    binding: &mut Binding<D>,
    instance: &dyn AlgorithmInstance,
    stats: &TrainedStatistics,
    resolver: &MultiplierResolver,
) -> CostResult<Vec<Factor>> {
    if let Some(factors) = binding.resolved_factors() {
        return Ok(factors);
    }

    let algorithm = instance.algorithm_name();
    binding
        .multipliers_mut()
        .iter_mut()
        .map(|multiplier| {
            multiplier.get_or_resolve(|kind| {
                if let Some(factor) = instance.try_resolve_multiplier(kind.as_str()) {
                    tracing::debug!(
                        algorithm,
                        multiplier = kind.as_str(),
                        factor,
                        "multiplier resolved by hook"
                    );
                    return Ok(factor);
                }
                let factor = resolver.resolve(kind, stats, algorithm)?;
                tracing::debug!(
                    algorithm,
                    multiplier = kind.as_str(),
                    factor,
                    "multiplier resolved from statistics"
                );
                Ok(factor)
            })
        })
        .collect()
}

/// Checked product of `factors`, starting from `base` (1 for space entries)
pub fn product(base: Factor, factors: &[Factor], context: &str) -> CostResult<Factor> {
    factors.iter().try_fold(base, |acc, &factor| {
        acc.checked_mul(factor)
            .ok_or_else(|| CostError::overflow(context))
    })
}

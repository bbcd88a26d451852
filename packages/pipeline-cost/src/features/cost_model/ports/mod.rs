//! Ports for algorithm-specific cost behaviour

use crate::errors::CostResult;
use crate::features::cost_model::domain::{Factor, TrainedStatistics};
use std::fmt::Debug;

/// Override hook: supply a multiplier's factor from algorithm-internal state.
///
/// Consulted before the generic multiplier table for every unresolved
/// multiplier the algorithm owns. Returning `None` falls through to the
/// table.
pub trait MultiplierOverride {
    fn try_resolve_multiplier(&self, name: &str) -> Option<Factor>;
}

/// Trained algorithm instance placed in a pipeline stage
pub trait AlgorithmInstance: MultiplierOverride + Debug + Send + Sync {
    /// Catalog name of the algorithm type
    fn algorithm_name(&self) -> &str;

    /// Reject statistics that contradict the instance's trained state.
    ///
    /// Called once per instance when a pipeline is bound.
    fn check_statistics(&self, _stats: &TrainedStatistics) -> CostResult<()> {
        Ok(())
    }
}

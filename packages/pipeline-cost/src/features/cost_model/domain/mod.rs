//! Domain models for pipeline cost estimation
//!
//! Pure data: declarations, multipliers, bindings, statistics and results.

pub mod binding;
pub mod declaration;
pub mod gate;
pub mod multiplier;
pub mod operation;
pub mod report;
pub mod statistics;

pub use binding::{Binding, OperationBinding, SpaceBinding};
pub use declaration::{
    AlgorithmCostProfile, CatalogEntry, CostDeclaration, OperationDeclaration, OperationEntry,
    SpaceDeclaration, SpaceEntry,
};
pub use gate::FeatureGate;
pub use multiplier::{Factor, Multiplier, MultiplierKind, MultiplierState};
pub use operation::{OperationCategory, QuantityKind};
pub use report::{CostReport, StageBreakdown, StageKind};
pub use statistics::{Statistic, TrainedStatistics};

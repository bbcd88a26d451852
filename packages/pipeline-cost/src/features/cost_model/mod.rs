//! Cost Model: static resource estimation for trained pipelines
//!
//! Estimates per-inference operation counts (by category) and static
//! memory footprint (integer and float words) of a trained classification
//! pipeline without executing it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Application Layer                       │
//! │  - CostAnalysisEngine (aggregation)     │
//! │  - Pipeline (bound stages)              │
//! └─────────────────────────────────────────┘
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - CostCatalog (static declarations)    │
//! │  - binder (bindings + two-tier resolve) │
//! │  - MultiplierResolver (generic table)   │
//! │  - bundled algorithm hooks              │
//! └─────────────────────────────────────────┘
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer / Ports                    │
//! │  - declarations, multipliers, bindings  │
//! │  - MultiplierOverride, AlgorithmInstance│
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use pipeline_cost::features::cost_model::*;
//! use std::sync::Arc;
//!
//! let engine = CostAnalysisEngine::new(Arc::new(CostCatalog::builtin()));
//! let definition = PipelineDefinition::new(vec![Arc::new(SupportVectorClassifier::new(40))])
//!     .with_feature_extraction(vec![Arc::new(FftFeatureExtractor::new(64)?)]);
//! let stats = TrainedStatistics::new().with_attributes(12).with_classes(3).with_lines_per_feature(64);
//!
//! let mut pipeline = engine.instantiate(definition, stats)?;
//! println!("{} operations", engine.total_operations(&mut pipeline)?);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer
pub use application::{AlgorithmRef, BoundAlgorithm, CostAnalysisEngine, Pipeline, PipelineDefinition};

// Re-exports for convenience
pub use domain::{
    AlgorithmCostProfile, Binding, CatalogEntry, CostDeclaration, CostReport, Factor, FeatureGate,
    Multiplier, MultiplierKind, MultiplierState, OperationBinding, OperationCategory,
    OperationDeclaration, OperationEntry, QuantityKind, SpaceBinding, SpaceDeclaration, SpaceEntry,
    StageBreakdown, StageKind, Statistic, TrainedStatistics,
};
pub use infrastructure::{
    CatalogAlgorithm, CostCatalog, DecisionTreeClassifier, FftFeatureExtractor,
    MultiplierResolver, SupportVectorClassifier,
};
pub use ports::{AlgorithmInstance, MultiplierOverride};

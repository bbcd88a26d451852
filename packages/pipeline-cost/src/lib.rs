/*
 * Pipeline Cost - static resource estimation for embedded classifiers
 *
 * Feature-First Hexagonal Architecture:
 * - features/    : Vertical slices (cost_model)
 * - config/      : Versioned YAML catalogs
 * - errors.rs    : Error types
 *
 * Estimates, without executing it, the per-inference operation counts and
 * static memory footprint of a trained feature-extraction / preprocessing /
 * classification pipeline.
 */

/// Configuration (catalog files)
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{CostError, CostResult};
pub use features::cost_model::{
    CostAnalysisEngine, CostCatalog, CostReport, OperationCategory, Pipeline, PipelineDefinition,
    StageBreakdown, TrainedStatistics,
};

//! Application layer: pipeline instantiation and analysis

pub mod analysis_engine;
pub mod pipeline;

pub use analysis_engine::CostAnalysisEngine;
pub use pipeline::{AlgorithmRef, BoundAlgorithm, Pipeline, PipelineDefinition};

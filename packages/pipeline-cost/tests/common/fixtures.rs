//! Test fixtures

use pipeline_cost::features::cost_model::{
    AlgorithmRef, CatalogAlgorithm, CostAnalysisEngine, CostCatalog, DecisionTreeClassifier,
    FftFeatureExtractor, PipelineDefinition, SupportVectorClassifier, TrainedStatistics,
};
use std::sync::Arc;

pub fn algorithm(name: &str) -> AlgorithmRef {
    Arc::new(CatalogAlgorithm::new(name))
}

pub fn builtin_engine() -> CostAnalysisEngine {
    CostAnalysisEngine::new(Arc::new(CostCatalog::builtin()))
}

/// Fully trained statistics for a small accelerometer-style dataset
pub fn trained_stats() -> TrainedStatistics {
    TrainedStatistics::new()
        .with_attributes(6)
        .with_classes(3)
        .with_user_selected_attributes(4)
        .with_instances(50)
        .with_lines_per_feature(5)
        .with_features(["mean", "fft"])
}

/// Three-stage pipeline over the built-in catalog, FFT window 5
pub fn full_definition() -> PipelineDefinition {
    full_definition_with_window(5)
}

/// Three-stage pipeline whose FFT window is `lines_per_feature`
pub fn full_definition_with_window(lines_per_feature: u64) -> PipelineDefinition {
    PipelineDefinition::new(vec![
        Arc::new(SupportVectorClassifier::new(12)),
        Arc::new(DecisionTreeClassifier::new(4, 15)),
    ])
    .with_feature_extraction(vec![
        algorithm("mean"),
        algorithm("variance"),
        Arc::new(FftFeatureExtractor::new(lines_per_feature).expect("valid window")),
    ])
    .with_preprocessing(vec![algorithm("z_score")])
}

//! Pipelines: algorithm instances per stage, bound to catalog declarations

use crate::errors::{CostError, CostResult};
use crate::features::cost_model::domain::{
    OperationBinding, SpaceBinding, StageKind, TrainedStatistics,
};
use crate::features::cost_model::infrastructure::binder;
use crate::features::cost_model::infrastructure::CostCatalog;
use crate::features::cost_model::ports::AlgorithmInstance;
use std::sync::Arc;

/// Shared handle to a trained algorithm instance
pub type AlgorithmRef = Arc<dyn AlgorithmInstance>;

/// Trained algorithm instances per stage, before binding
#[derive(Debug, Clone)]
pub struct PipelineDefinition {
    pub feature_extraction: Option<Vec<AlgorithmRef>>,
    pub preprocessing: Option<Vec<AlgorithmRef>>,
    pub classification: Vec<AlgorithmRef>,
}

impl PipelineDefinition {
    /// Pipeline with only a classification stage
    pub fn new(classification: Vec<AlgorithmRef>) -> Self {
        Self {
            feature_extraction: None,
            preprocessing: None,
            classification,
        }
    }

    pub fn with_feature_extraction(mut self, algorithms: Vec<AlgorithmRef>) -> Self {
        self.feature_extraction = Some(algorithms);
        self
    }

    pub fn with_preprocessing(mut self, algorithms: Vec<AlgorithmRef>) -> Self {
        self.preprocessing = Some(algorithms);
        self
    }
}

/// One algorithm instance with its bindings
#[derive(Debug, Clone)]
pub struct BoundAlgorithm {
    pub(crate) instance: AlgorithmRef,
    pub(crate) operations: Vec<OperationBinding>,
    pub(crate) spaces: Vec<SpaceBinding>,
}

impl BoundAlgorithm {
    /// Bind every catalog entry of the instance's algorithm type
    pub fn bind(instance: AlgorithmRef, catalog: &CostCatalog) -> CostResult<Self> {
        let profile = catalog.profile(instance.algorithm_name())?;
        Ok(Self {
            operations: profile.operations.iter().map(binder::bind_entry).collect(),
            spaces: profile.spaces.iter().map(binder::bind_entry).collect(),
            instance,
        })
    }

    pub fn instance(&self) -> &dyn AlgorithmInstance {
        self.instance.as_ref()
    }

    pub fn operations(&self) -> &[OperationBinding] {
        &self.operations
    }

    pub fn spaces(&self) -> &[SpaceBinding] {
        &self.spaces
    }
}

/// A trained pipeline ready for analysis
///
/// Multiplier factors are memoized inside the bindings, so analysis takes
/// `&mut Pipeline`: one pipeline is analyzed by one caller at a time,
/// while distinct pipelines share no mutable state.
#[derive(Debug, Clone)]
pub struct Pipeline {
    feature_extraction: Option<Vec<BoundAlgorithm>>,
    preprocessing: Option<Vec<BoundAlgorithm>>,
    classification: Vec<BoundAlgorithm>,
    statistics: Arc<TrainedStatistics>,
}

impl Pipeline {
    /// Bind a definition against `catalog`
    ///
    /// Fails if the classification stage is empty, an instance names an
    /// algorithm the catalog does not declare, or an instance's trained
    /// state contradicts `statistics`.
    pub fn bind(
        definition: PipelineDefinition,
        catalog: &CostCatalog,
        statistics: Arc<TrainedStatistics>,
    ) -> CostResult<Self> {
        if definition.classification.is_empty() {
            return Err(CostError::EmptyClassificationStage);
        }

        let bind_stage = |algorithms: Vec<AlgorithmRef>| -> CostResult<Vec<BoundAlgorithm>> {
            algorithms
                .into_iter()
                .map(|instance| {
                    instance.check_statistics(&statistics)?;
                    BoundAlgorithm::bind(instance, catalog)
                })
                .collect()
        };

        let feature_extraction = definition.feature_extraction.map(bind_stage).transpose()?;
        let preprocessing = definition.preprocessing.map(bind_stage).transpose()?;
        let classification = bind_stage(definition.classification)?;

        Ok(Self {
            feature_extraction,
            preprocessing,
            classification,
            statistics,
        })
    }

    pub fn statistics(&self) -> &TrainedStatistics {
        &self.statistics
    }

    pub(crate) fn statistics_handle(&self) -> Arc<TrainedStatistics> {
        Arc::clone(&self.statistics)
    }

    /// Algorithms of `stage`, `None` when the stage is absent
    pub fn stage(&self, stage: StageKind) -> Option<&[BoundAlgorithm]> {
        match stage {
            StageKind::FeatureExtraction => self.feature_extraction.as_deref(),
            StageKind::Preprocessing => self.preprocessing.as_deref(),
            StageKind::Classification => Some(&self.classification),
        }
    }

    pub(crate) fn stage_mut(&mut self, stage: StageKind) -> Option<&mut [BoundAlgorithm]> {
        match stage {
            StageKind::FeatureExtraction => self.feature_extraction.as_deref_mut(),
            StageKind::Preprocessing => self.preprocessing.as_deref_mut(),
            StageKind::Classification => Some(&mut self.classification),
        }
    }

    /// Total number of bindings (operations and spaces) across all stages
    pub fn binding_count(&self) -> usize {
        StageKind::ALL
            .into_iter()
            .filter_map(|stage| self.stage(stage))
            .flatten()
            .map(|algorithm| algorithm.operations.len() + algorithm.spaces.len())
            .sum()
    }
}

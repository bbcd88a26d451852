//! Cost Analysis Engine
//!
//! Orchestrates resolution and aggregation across the three pipeline
//! stages.
//!
//! Algorithm (per stage, absent stages contribute 0):
//! 1. Skip bindings whose feature gate is inactive (no resolution attempted)
//! 2. Resolve unresolved multipliers: override hook, then generic table
//! 3. Multiply base count (operations) or 1 (space) by the factors
//! 4. Accumulate with checked arithmetic
//!
//! Any failure aborts the whole call; partial totals are never returned.

use crate::errors::{CostError, CostResult};
use crate::features::cost_model::application::pipeline::{
    BoundAlgorithm, Pipeline, PipelineDefinition,
};
use crate::features::cost_model::domain::{
    CostReport, Factor, OperationCategory, QuantityKind, StageBreakdown, StageKind,
    TrainedStatistics,
};
use crate::features::cost_model::infrastructure::binder;
use crate::features::cost_model::infrastructure::{CostCatalog, MultiplierResolver};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Cost Analysis Engine
///
/// Holds the shared, read-only catalog. Stateless otherwise: the only
/// mutable state is the multiplier cache inside each pipeline.
#[derive(Debug, Clone)]
pub struct CostAnalysisEngine {
    catalog: Arc<CostCatalog>,
    resolver: MultiplierResolver,
}

impl CostAnalysisEngine {
    pub fn new(catalog: Arc<CostCatalog>) -> Self {
        tracing::info!("cost_analysis_engine_initialized (algorithms={})", catalog.len());

        Self {
            catalog,
            resolver: MultiplierResolver::new(),
        }
    }

    pub fn catalog(&self) -> &CostCatalog {
        &self.catalog
    }

    /// Create fresh bindings for a trained pipeline
    pub fn instantiate(
        &self,
        definition: PipelineDefinition,
        statistics: impl Into<Arc<TrainedStatistics>>,
    ) -> CostResult<Pipeline> {
        let pipeline = Pipeline::bind(definition, &self.catalog, statistics.into())?;
        tracing::info!(
            "pipeline_instantiated (bindings={}, features={})",
            pipeline.binding_count(),
            pipeline.statistics().features.len()
        );
        Ok(pipeline)
    }

    /// Sum of `operations_by_category` over every category and stage
    pub fn total_operations(&self, pipeline: &mut Pipeline) -> CostResult<i64> {
        OperationCategory::ALL
            .into_iter()
            .try_fold(0i64, |total, category| {
                let stage_total = self.operations_by_category(pipeline, category)?.total()?;
                checked_add(total, stage_total, "total operations")
            })
    }

    /// Operations of one category, per stage
    pub fn operations_by_category(
        &self,
        pipeline: &mut Pipeline,
        category: OperationCategory,
    ) -> CostResult<StageBreakdown> {
        self.per_stage(pipeline, |algorithm, stats| {
            self.stage_operations(algorithm, stats, category)
        })
    }

    /// Integer words plus float words
    pub fn total_space(&self, pipeline: &mut Pipeline) -> CostResult<i64> {
        let integer = self.integer_space(pipeline)?.total()?;
        let float = self.float_space(pipeline)?.total()?;
        checked_add(integer, float, "total space")
    }

    /// Integer words, per stage
    pub fn integer_space(&self, pipeline: &mut Pipeline) -> CostResult<StageBreakdown> {
        self.space_of_kind(pipeline, QuantityKind::Integer)
    }

    /// Float words, per stage
    pub fn float_space(&self, pipeline: &mut Pipeline) -> CostResult<StageBreakdown> {
        self.space_of_kind(pipeline, QuantityKind::Float)
    }

    /// Full estimate for reporting
    pub fn report(&self, pipeline: &mut Pipeline) -> CostResult<CostReport> {
        let mut operations = BTreeMap::new();
        let mut total_operations = 0i64;
        for category in OperationCategory::ALL {
            let breakdown = self.operations_by_category(pipeline, category)?;
            total_operations = checked_add(total_operations, breakdown.total()?, "total operations")?;
            if !breakdown.is_zero() {
                operations.insert(category, breakdown);
            }
        }

        let integer_space = self.integer_space(pipeline)?;
        let float_space = self.float_space(pipeline)?;
        let total_space = checked_add(integer_space.total()?, float_space.total()?, "total space")?;

        tracing::info!(
            "cost_analysis_complete (operations={}, space={})",
            total_operations,
            total_space
        );

        Ok(CostReport {
            operations,
            total_operations,
            integer_space,
            float_space,
            total_space,
        })
    }

    /// Reports for independent pipelines, computed in parallel
    pub fn analyze_all(&self, pipelines: &mut [Pipeline]) -> Vec<CostResult<CostReport>> {
        pipelines
            .par_iter_mut()
            .map(|pipeline| self.report(pipeline))
            .collect()
    }

    fn space_of_kind(&self, pipeline: &mut Pipeline, kind: QuantityKind) -> CostResult<StageBreakdown> {
        self.per_stage(pipeline, |algorithm, stats| {
            self.stage_space(algorithm, stats, kind)
        })
    }

    /// Apply `per_algorithm` to every algorithm of every present stage
    fn per_stage<F>(&self, pipeline: &mut Pipeline, mut per_algorithm: F) -> CostResult<StageBreakdown>
    where
        F: FnMut(&mut BoundAlgorithm, &TrainedStatistics) -> CostResult<i64>,
    {
        let handle = pipeline.statistics_handle();
        let stats: &TrainedStatistics = &handle;
        let mut breakdown = StageBreakdown::default();

        for stage in StageKind::ALL {
            let Some(algorithms) = pipeline.stage_mut(stage) else {
                continue;
            };
            let mut sum = 0i64;
            for algorithm in algorithms.iter_mut() {
                let contribution = per_algorithm(algorithm, stats)?;
                sum = checked_add(sum, contribution, stage.as_str())?;
            }
            breakdown.set(stage, sum);
        }

        Ok(breakdown)
    }

    fn stage_operations(
        &self,
        algorithm: &mut BoundAlgorithm,
        stats: &TrainedStatistics,
        category: OperationCategory,
    ) -> CostResult<i64> {
        let instance = algorithm.instance.as_ref();
        let mut sum = 0i64;

        for binding in algorithm.operations.iter_mut() {
            let base = binding.declaration().base_count(category);
            if base == 0 || !binding.is_active(&stats.features) {
                continue;
            }
            let context = format!("{} {}", instance.algorithm_name(), category);
            let base = Factor::try_from(base).map_err(|_| CostError::overflow(context.as_str()))?;
            let factors = binder::resolve(binding, instance, stats, &self.resolver)?;
            let term = binder::product(base, &factors, &context)?;
            sum = checked_add(sum, term, &context)?;
        }

        Ok(sum)
    }

    fn stage_space(
        &self,
        algorithm: &mut BoundAlgorithm,
        stats: &TrainedStatistics,
        kind: QuantityKind,
    ) -> CostResult<i64> {
        let instance = algorithm.instance.as_ref();
        let mut sum = 0i64;

        for binding in algorithm.spaces.iter_mut() {
            if binding.declaration().kind() != kind || !binding.is_active(&stats.features) {
                continue;
            }
            let context = format!("{} {} space", instance.algorithm_name(), kind.as_str());
            let factors = binder::resolve(binding, instance, stats, &self.resolver)?;
            let term = binder::product(1, &factors, &context)?;
            sum = checked_add(sum, term, &context)?;
        }

        Ok(sum)
    }
}

fn checked_add(a: i64, b: i64, context: &str) -> CostResult<i64> {
    a.checked_add(b).ok_or_else(|| CostError::overflow(context))
}

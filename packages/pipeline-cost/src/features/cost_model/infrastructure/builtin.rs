//! Built-in catalog
//!
//! Cost declarations for the bundled algorithms. Multiplier names that
//! are not part of the well-known vocabulary (`numberOfRecursions`,
//! `treeDepth`, ...) are resolved by the algorithm's override hook.

use crate::features::cost_model::domain::{
    AlgorithmCostProfile, FeatureGate, MultiplierKind, OperationCategory, OperationDeclaration,
    OperationEntry, QuantityKind, SpaceDeclaration, SpaceEntry,
};
use OperationCategory::*;

/// Catalog names of the bundled algorithms
pub mod names {
    pub const MEAN: &str = "mean";
    pub const VARIANCE: &str = "variance";
    pub const FFT: &str = "fft";
    pub const MIN_MAX_NORMALIZATION: &str = "min_max_normalization";
    pub const Z_SCORE: &str = "z_score";
    pub const NAIVE_BAYES: &str = "naive_bayes";
    pub const KNN: &str = "knn";
    pub const SVM: &str = "svm";
    pub const DECISION_TREE: &str = "decision_tree";
}

/// Multiplier names resolved by bundled hooks
pub mod hook_names {
    pub const UNIT_SQUARE_ROOTS: &str = "numberOfUnitSquareRoots";
    pub const RECURSIONS: &str = "numberOfRecursions";
    pub const SUPPORT_VECTORS: &str = "numberOfSupportVectors";
    pub const TREE_DEPTH: &str = "treeDepth";
    pub const TREE_NODES: &str = "numberOfNodes";
}

fn kinds(names: &[&str]) -> Vec<MultiplierKind> {
    names.iter().copied().map(MultiplierKind::parse).collect()
}

fn op(counts: &[(OperationCategory, u64)], multipliers: &[&str]) -> OperationDeclaration {
    OperationDeclaration::new(counts.iter().copied(), kinds(multipliers))
}

fn space(kind: QuantityKind, multipliers: &[&str]) -> SpaceDeclaration {
    SpaceDeclaration::new(kind, kinds(multipliers))
}

pub fn builtin_profiles() -> Vec<AlgorithmCostProfile> {
    use hook_names::*;
    use QuantityKind::{Float, Integer};

    vec![
        // Feature extraction
        AlgorithmCostProfile::new(names::MEAN)
            .with_operation(OperationEntry::gated(
                op(&[(Add, 1)], &["LINES_PER_FEATURE_MINUS_ONE", "ATTRIBUTES"]),
                FeatureGate::any_of([names::MEAN]),
            ))
            .with_operation(OperationEntry::gated(
                op(&[(Divide, 1)], &["ATTRIBUTES"]),
                FeatureGate::any_of([names::MEAN]),
            ))
            .with_space(SpaceEntry::gated(
                space(Float, &["ATTRIBUTES"]),
                FeatureGate::any_of([names::MEAN]),
            )),
        AlgorithmCostProfile::new(names::VARIANCE)
            .with_operation(OperationEntry::gated(
                op(
                    &[(Add, 2), (Subtract, 1), (Multiply, 1)],
                    &["LINES_PER_FEATURE", "ATTRIBUTES"],
                ),
                FeatureGate::any_of([names::VARIANCE]),
            ))
            .with_operation(OperationEntry::gated(
                op(&[(Divide, 2)], &["ATTRIBUTES"]),
                FeatureGate::any_of([names::VARIANCE]),
            ))
            .with_space(SpaceEntry::gated(
                space(Float, &["ATTRIBUTES"]),
                FeatureGate::any_of([names::VARIANCE]),
            )),
        AlgorithmCostProfile::new(names::FFT)
            // Radix-2 butterfly: one complex multiply, two complex adds
            .with_operation(OperationEntry::new(op(
                &[(Multiply, 4), (Add, 6)],
                &[RECURSIONS],
            )))
            .with_operation(OperationEntry::new(op(
                &[(Trigonometric, 2)],
                &[UNIT_SQUARE_ROOTS],
            )))
            .with_operation(OperationEntry::new(op(
                &[(SquareRoot, 1), (Multiply, 2), (Add, 1)],
                &["LINES_PER_FEATURE"],
            )))
            .with_space(SpaceEntry::new(space(Float, &[UNIT_SQUARE_ROOTS, "CONSTANT"])))
            .with_space(SpaceEntry::new(space(Integer, &["LINES_PER_FEATURE"]))),
        // Preprocessing
        AlgorithmCostProfile::new(names::MIN_MAX_NORMALIZATION)
            .with_operation(OperationEntry::new(op(
                &[(Subtract, 1), (Divide, 1)],
                &["ATTRIBUTES"],
            )))
            .with_space(SpaceEntry::new(space(Float, &["ATTRIBUTES"])))
            .with_space(SpaceEntry::new(space(Float, &["ATTRIBUTES"]))),
        AlgorithmCostProfile::new(names::Z_SCORE)
            .with_operation(OperationEntry::new(op(
                &[(Subtract, 1), (Divide, 1)],
                &["ATTRIBUTES"],
            )))
            .with_space(SpaceEntry::new(space(Float, &["ATTRIBUTES"])))
            .with_space(SpaceEntry::new(space(Float, &["ATTRIBUTES"]))),
        // Classification
        AlgorithmCostProfile::new(names::NAIVE_BAYES)
            .with_operation(OperationEntry::new(op(
                &[(Subtract, 1), (Multiply, 3), (Divide, 1), (Add, 1)],
                &["CLASSES", "ATTRIBUTES"],
            )))
            .with_operation(OperationEntry::new(op(&[(Exponential, 1)], &["CLASSES", "ATTRIBUTES"])))
            .with_operation(OperationEntry::new(op(&[(Compare, 1)], &["CLASSES_MINUS_ONE"])))
            .with_space(SpaceEntry::new(space(Float, &["CLASSES", "ATTRIBUTES"])))
            .with_space(SpaceEntry::new(space(Float, &["CLASSES", "ATTRIBUTES"])))
            .with_space(SpaceEntry::new(space(Float, &["CLASSES"]))),
        AlgorithmCostProfile::new(names::KNN)
            .with_operation(OperationEntry::new(op(
                &[(Subtract, 1), (Multiply, 1), (Add, 1)],
                &["INSTANCES", "ATTRIBUTES"],
            )))
            .with_operation(OperationEntry::new(op(&[(Compare, 1)], &["INSTANCES"])))
            .with_space(SpaceEntry::new(space(Float, &["INSTANCES", "ATTRIBUTES"])))
            .with_space(SpaceEntry::new(space(Integer, &["INSTANCES"]))),
        AlgorithmCostProfile::new(names::SVM)
            .with_operation(OperationEntry::new(op(
                &[(Multiply, 1), (Add, 1)],
                &[SUPPORT_VECTORS, "ATTRIBUTES"],
            )))
            .with_operation(OperationEntry::new(op(&[(Compare, 1)], &["CLASSES_MINUS_ONE"])))
            .with_space(SpaceEntry::new(space(Float, &[SUPPORT_VECTORS, "ATTRIBUTES"])))
            .with_space(SpaceEntry::new(space(Float, &[SUPPORT_VECTORS]))),
        AlgorithmCostProfile::new(names::DECISION_TREE)
            .with_operation(OperationEntry::new(op(&[(Compare, 1)], &[TREE_DEPTH])))
            .with_space(SpaceEntry::new(space(Integer, &[TREE_NODES])))
            .with_space(SpaceEntry::new(space(Float, &[TREE_NODES])))
            .with_space(SpaceEntry::new(space(Integer, &[TREE_NODES, "CONSTANT"]))),
    ]
}

//! Infrastructure layer for cost estimation

pub mod algorithms;
pub mod binder;
pub mod builtin;
pub mod catalog;
pub mod resolver;

pub use algorithms::{
    CatalogAlgorithm, DecisionTreeClassifier, FftFeatureExtractor, SupportVectorClassifier,
};
pub use catalog::CostCatalog;
pub use resolver::MultiplierResolver;

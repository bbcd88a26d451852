//! Configuration
//!
//! Cost catalogs are configuration: they are authored as versioned YAML
//! documents (schema v1) and validated on load.
//!
//! # Example
//!
//! ```rust,ignore
//! use pipeline_cost::features::cost_model::CostCatalog;
//!
//! let catalog = CostCatalog::from_yaml("catalog.yaml")?;
//! ```

pub mod catalog_io;
pub mod error;
pub mod validation;

// Re-exports
pub use catalog_io::{AlgorithmSpecV1, CatalogExportV1, OperationSpecV1, SpaceSpecV1};
pub use error::{ConfigError, ConfigResult};
pub use validation::Validatable;

/// Environment variable naming a catalog file
pub const CATALOG_ENV_VAR: &str = "PIPELINE_COST_CATALOG";

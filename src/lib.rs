pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::PackageFile;
pub use domain::model::{Category, Classification, PackageMeasurement};
pub use domain::sorter::{
    classify, classify_measurement, classify_values, inspect, DIMENSION_LIMIT, MASS_LIMIT,
    VOLUME_LIMIT,
};
pub use utils::error::{Result, SortError};
pub use utils::validation::NumericInput;

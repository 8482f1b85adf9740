use crate::domain::model::PackageMeasurement;
use crate::utils::error::Result;
use crate::utils::validation::{NumericInput, Validate};
use serde::Deserialize;
use std::path::Path;

/// A single package described in TOML:
///
/// ```toml
/// [package]
/// width = 150
/// height = 10
/// length = 10
/// mass = 19.5
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PackageFile {
    pub package: PackageTable,
}

/// Raw values are kept untyped so a quoted number reports as a type error
/// instead of a TOML parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageTable {
    pub width: Option<toml::Value>,
    pub height: Option<toml::Value>,
    pub length: Option<toml::Value>,
    pub mass: Option<toml::Value>,
}

impl PackageFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded package file");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn measurement(&self) -> Result<PackageMeasurement> {
        let table = &self.package;
        let width = NumericInput::from(table.width.clone()).to_number("width")?;
        let height = NumericInput::from(table.height.clone()).to_number("height")?;
        let length = NumericInput::from(table.length.clone()).to_number("length")?;
        let mass = NumericInput::from(table.mass.clone()).to_number("mass")?;

        PackageMeasurement::new(width, height, length, mass)
    }
}

impl Validate for PackageFile {
    fn validate(&self) -> Result<()> {
        self.measurement().map(|_| ())
    }
}

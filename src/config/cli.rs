use crate::config::package_file::PackageFile;
use crate::domain::model::PackageMeasurement;
use crate::utils::error::{Result, SortError};
use crate::utils::validation::{parse_number, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Category token only
    Text,
    /// Full classification report
    Json,
}

/// Dimensions are taken as text so that a non-numeric flag surfaces as
/// `InvalidArgumentType` rather than a clap usage error.
#[derive(Debug, Clone, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Sort a package into STANDARD, SPECIAL or REJECTED by size and mass")]
pub struct CliConfig {
    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub width: Option<String>,

    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub height: Option<String>,

    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub length: Option<String>,

    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    pub mass: Option<String>,

    /// TOML file with a [package] table
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn measurement(&self) -> Result<PackageMeasurement> {
        if let Some(path) = &self.input {
            return PackageFile::from_file(path)?.measurement();
        }

        let width = parse_flag("width", &self.width)?;
        let height = parse_flag("height", &self.height)?;
        let length = parse_flag("length", &self.length)?;
        let mass = parse_flag("mass", &self.mass)?;

        PackageMeasurement::new(width, height, length, mass)
    }
}

fn parse_flag(field_name: &str, value: &Option<String>) -> Result<f64> {
    match value {
        Some(text) => parse_number(field_name, text),
        None => Err(SortError::invalid_type(field_name)),
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.input.is_some() {
            return Ok(());
        }

        for (field, value) in [
            ("width", &self.width),
            ("height", &self.height),
            ("length", &self.length),
            ("mass", &self.mass),
        ] {
            if value.is_none() {
                return Err(SortError::invalid_type(field));
            }
        }
        Ok(())
    }
}

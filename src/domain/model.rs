use crate::utils::error::{Result, SortError};
use crate::utils::validation::{validate_finite, validate_positive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimensions and mass of one package, all strictly positive.
///
/// Only [`PackageMeasurement::new`] builds one, so a held value has already
/// passed both the numeric and the positivity check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackageMeasurement {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl PackageMeasurement {
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self> {
        // every type check runs before any value check
        let width = validate_finite("width", width)?;
        let height = validate_finite("height", height)?;
        let length = validate_finite("length", length)?;
        let mass = validate_finite("mass", mass)?;

        Ok(Self {
            width: validate_positive("width", width)?,
            height: validate_positive("height", height)?,
            length: validate_positive("length", length)?,
            mass: validate_positive("mass", mass)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn longest_side(&self) -> f64 {
        self.width.max(self.height).max(self.length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Standard,
    Special,
    Rejected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Special => "SPECIAL",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            "SPECIAL" => Ok(Self::Special),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(SortError::UnknownCategory {
                token: s.to_string(),
            }),
        }
    }
}

/// Outcome of one classification together with the predicates behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub measurement: PackageMeasurement,
    pub volume: f64,
    pub is_bulky: bool,
    pub is_heavy: bool,
    pub category: Category,
}

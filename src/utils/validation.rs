use crate::utils::error::{Result, SortError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A loosely typed value arriving from outside the typed API.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Missing,
}

impl NumericInput {
    /// Interpret the value as a real number.
    ///
    /// Booleans count as the integers 1 and 0. Text is never coerced here,
    /// even when it looks numeric; use [`parse_number`] for command-line
    /// style input.
    pub fn to_number(&self, field_name: &str) -> Result<f64> {
        match self {
            Self::Integer(value) => Ok(*value as f64),
            Self::Float(value) => validate_finite(field_name, *value),
            Self::Boolean(value) => Ok(i64::from(*value) as f64),
            Self::Text(_) | Self::Missing => Err(SortError::invalid_type(field_name)),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for NumericInput {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Missing)
    }
}

impl From<serde_json::Value> for NumericInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                // u64 beyond i64::MAX and all floats land here
                None => n.as_f64().map(Self::Float).unwrap_or(Self::Missing),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Null => Self::Missing,
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<toml::Value> for NumericInput {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::Integer(i) => Self::Integer(i),
            toml::Value::Float(f) => Self::Float(f),
            toml::Value::String(s) => Self::Text(s),
            toml::Value::Boolean(b) => Self::Boolean(b),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Parse command-line text as an integer or decimal number.
pub fn parse_number(field_name: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SortError::invalid_type(field_name));
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| SortError::invalid_type(field_name))?;
    validate_finite(field_name, value)
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(SortError::invalid_type(field_name));
    }
    Ok(value)
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<f64> {
    if value <= 0.0 {
        return Err(SortError::invalid_value(field_name));
    }
    Ok(value)
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("All inputs must be numbers.")]
    InvalidArgumentType { field: String },

    #[error("All dimensions and mass must be greater than zero.")]
    InvalidArgumentValue { field: String },

    #[error("Unknown category: {token} (expected STANDARD, SPECIAL or REJECTED)")]
    UnknownCategory { token: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller passed something that cannot be classified.
    Input,
    /// Reading or writing around the classifier failed.
    System,
}

impl SortError {
    pub fn invalid_type(field: impl Into<String>) -> Self {
        Self::InvalidArgumentType {
            field: field.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>) -> Self {
        Self::InvalidArgumentValue {
            field: field.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgumentType { .. }
            | Self::InvalidArgumentValue { .. }
            | Self::UnknownCategory { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::ParseError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Name of the offending input, when the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgumentType { field } | Self::InvalidArgumentValue { field } => {
                Some(field.as_str())
            }
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgumentType { .. } => {
                "Pass width, height, length and mass as integer or decimal numbers"
            }
            Self::InvalidArgumentValue { .. } => {
                "Measure the package again; every dimension and the mass must be above zero"
            }
            Self::UnknownCategory { .. } => "Use one of STANDARD, SPECIAL or REJECTED",
            Self::IoError(_) => "Check that the package file exists and is readable",
            Self::ParseError(_) => "Check the package file is valid TOML with a [package] table",
            Self::SerializationError(_) => "Retry with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.field() {
            Some(field) => format!("{} (offending input: {})", self, field),
            None => self.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::System => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecError {
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Year {year} not found in emissions series (available: {available})")]
    YearNotFound { year: i32, available: String },

    #[error("No city matching '{query}'")]
    CityNotFound { query: String },

    #[error("Species '{species}' not present in the reference table")]
    LookupFailure { species: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Resolution,
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecError::InvalidInput { .. } => ErrorCategory::Input,
            RecError::YearNotFound { .. }
            | RecError::CityNotFound { .. }
            | RecError::LookupFailure { .. } => ErrorCategory::Resolution,
            RecError::CsvError(_) | RecError::SerializationError(_) => ErrorCategory::Data,
            RecError::ConfigValidationError { .. }
            | RecError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            RecError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Resolution misses are scoped to one request and never fatal: the
    /// caller substitutes a placeholder result and keeps going.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RecError::YearNotFound { .. }
            | RecError::CityNotFound { .. }
            | RecError::LookupFailure { .. } => ErrorSeverity::Low,
            RecError::InvalidInput { .. } => ErrorSeverity::Medium,
            RecError::CsvError(_) | RecError::SerializationError(_) => ErrorSeverity::High,
            RecError::ConfigValidationError { .. }
            | RecError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RecError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecError::YearNotFound { year, available } => format!(
                "No prediction is available for {}. Years with predictions: {}",
                year, available
            ),
            RecError::CityNotFound { query } => {
                format!("No city in the dataset matches '{}'", query)
            }
            RecError::LookupFailure { species } => {
                format!("'{}' is not in the species reference table", species)
            }
            RecError::InvalidInput {
                field,
                value,
                reason,
            } => format!("'{}' is not usable for {}: {}", value, field, reason),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => {
                "Check the numeric inputs; emissions must be finite and non-negative".to_string()
            }
            ErrorCategory::Resolution => {
                "Try a different city spelling or one of the supported years".to_string()
            }
            ErrorCategory::Data => {
                "Check that the input CSV files are well-formed and use the expected headers"
                    .to_string()
            }
            ErrorCategory::Config => {
                "Review the configuration values and re-run with --help for accepted flags"
                    .to_string()
            }
            ErrorCategory::System => {
                "Check file paths and permissions for the input and output locations".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecError>;

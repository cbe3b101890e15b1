use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Hub '{hub}' has no staff configured")]
    NotConfiguredError { hub: String },

    #[error("Rejected record {ssn}: {reason}")]
    RecordError { ssn: String, reason: String },

    #[error("Wrong header in people file: '{header}'")]
    HeaderError { header: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Ingestion,
    System,
}

impl PlannerError {
    pub fn config(message: impl Into<String>) -> Self {
        PlannerError::ConfigError {
            message: message.into(),
        }
    }

    pub fn record(ssn: impl Into<String>, reason: impl Into<String>) -> Self {
        PlannerError::RecordError {
            ssn: ssn.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::ConfigError { .. }
            | PlannerError::NotConfiguredError { .. }
            | PlannerError::HeaderError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::TomlError(_) => ErrorCategory::Configuration,
            PlannerError::RecordError { .. } | PlannerError::CsvError(_) => {
                ErrorCategory::Ingestion
            }
            PlannerError::IoError(_) | PlannerError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Ingestion => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

use crate::adapters::storage::ResourceStorage;
use crate::domain::cdm::UnknownCode;
use thiserror::Error;

/// Why a well-formed Golden Schema record could not become `EconomicTerms`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("{field} value '{value}' is not an ISO-8601 date (YYYY-MM-DD): {reason}")]
    DateParseFailure {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field} has an unknown value")]
    UnknownEnumValue {
        field: String,
        #[source]
        source: UnknownCode,
    },

    #[error("{field} is required when the date is present")]
    MissingField { field: String },

    #[error("{field} must be a {expected}, found {found}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingErrorKind {
    DateParseFailure,
    UnknownEnumValue,
    MissingField,
    UnexpectedType,
}

impl MappingError {
    pub fn kind(&self) -> MappingErrorKind {
        match self {
            MappingError::DateParseFailure { .. } => MappingErrorKind::DateParseFailure,
            MappingError::UnknownEnumValue { .. } => MappingErrorKind::UnknownEnumValue,
            MappingError::MissingField { .. } => MappingErrorKind::MissingField,
            MappingError::UnexpectedType { .. } => MappingErrorKind::UnexpectedType,
        }
    }

    /// Golden Schema key the failure is attributed to.
    pub fn field(&self) -> &str {
        match self {
            MappingError::DateParseFailure { field, .. }
            | MappingError::UnknownEnumValue { field, .. }
            | MappingError::MissingField { field }
            | MappingError::UnexpectedType { field, .. } => field,
        }
    }
}

#[derive(Error, Debug)]
pub enum CdmError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Malformed Golden Schema payload: {message}")]
    MalformedPayload { message: String },

    #[error("Failed to build EconomicTerms: {0}")]
    MappingFailure(#[from] MappingError),

    #[error("Missing input: {message}")]
    ConfigMissing { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Mapping,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CdmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CdmError::InvalidInput { .. } | CdmError::MalformedPayload { .. } => {
                ErrorCategory::Input
            }
            CdmError::MappingFailure(_) => ErrorCategory::Mapping,
            CdmError::ConfigMissing { .. }
            | CdmError::ConfigError { .. }
            | CdmError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CdmError::IoError(_) | CdmError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Mapping | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for the CLI. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Mapping => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CdmError::InvalidInput { .. } => {
                "Provide a non-empty Golden Schema JSON document".to_string()
            }
            CdmError::MalformedPayload { .. } => {
                "Check that the input is a UTF-8 JSON object".to_string()
            }
            CdmError::MappingFailure(e) => format!(
                "Fix the '{}' field; dates use YYYY-MM-DD and codes must match the CDM enumerations exactly",
                e.field()
            ),
            CdmError::ConfigMissing { .. } => format!(
                "Check the file path or resource name, or pass --resources-dir (bundled resources: {})",
                ResourceStorage::bundled_names().collect::<Vec<_>>().join(", ")
            ),
            CdmError::ConfigError { .. } | CdmError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
            CdmError::IoError(_) => "Check file permissions and available disk space".to_string(),
            CdmError::SerializationError(_) => {
                "Re-run with --verbose and report the failing input".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CdmError::MappingFailure(e) => format!("Could not map Golden Schema data: {}", e),
            other => other.to_string(),
        }
    }

    /// Structured cause of a mapping failure, when that is what this is.
    pub fn mapping_error(&self) -> Option<&MappingError> {
        match self {
            CdmError::MappingFailure(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CdmError>;

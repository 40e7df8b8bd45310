use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid participant on row {row}: {reason}")]
    InvalidParticipantError { row: usize, reason: String },

    #[error("No participants to group")]
    EmptyInputError,

    #[error(
        "{participants} participants cannot fit into {groups} groups of at most {capacity}"
    )]
    CapacityExceeded {
        participants: usize,
        groups: usize,
        capacity: usize,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
    Grouping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GroupingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GroupingError::IoError(_) | GroupingError::SerializationError(_) => ErrorCategory::Io,
            GroupingError::CsvError(_)
            | GroupingError::InvalidParticipantError { .. }
            | GroupingError::EmptyInputError => ErrorCategory::Input,
            GroupingError::ConfigError { .. }
            | GroupingError::ConfigValidationError { .. }
            | GroupingError::InvalidConfigValueError { .. }
            | GroupingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GroupingError::CapacityExceeded { .. } | GroupingError::ValidationError { .. } => {
                ErrorCategory::Grouping
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            // resolver clamping should make these unreachable
            ErrorCategory::Grouping => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GroupingError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            GroupingError::SerializationError(_) => {
                "Try a different output format (table or csv)".to_string()
            }
            GroupingError::CsvError(_) => {
                "Make sure the participants file is valid CSV with a 'score' column".to_string()
            }
            GroupingError::InvalidParticipantError { .. } => {
                "Fix the score on the reported row; scores must be numbers within the allowed range"
                    .to_string()
            }
            GroupingError::EmptyInputError => {
                "Provide at least one participant via --input or --scores".to_string()
            }
            GroupingError::ConfigError { .. }
            | GroupingError::ConfigValidationError { .. }
            | GroupingError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again".to_string()
            }
            GroupingError::MissingConfigError { field } => {
                format!("Set '{}' in the configuration file or on the command line", field)
            }
            GroupingError::CapacityExceeded { .. } => {
                "Request more groups; each group holds at most 4 participants".to_string()
            }
            GroupingError::ValidationError { .. } => "Check the input values".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GroupingError::IoError(e) => format!("Could not read or write a file: {}", e),
            GroupingError::CsvError(e) => format!("Could not read participants: {}", e),
            GroupingError::InvalidParticipantError { row, reason } => {
                format!("Participant on row {} is invalid: {}", row, reason)
            }
            GroupingError::EmptyInputError => "There are no participants to group".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GroupingError>;

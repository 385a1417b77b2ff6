use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rules file parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::IoError(_) => ErrorCategory::Input,
            CheckError::CsvError(_) | CheckError::SerializationError(_) => ErrorCategory::Output,
            CheckError::TomlParseError(_) | CheckError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CheckError::IoError(_) => ErrorSeverity::Critical,
            CheckError::CsvError(_) | CheckError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Input file not found".to_string()
            }
            CheckError::IoError(e) => format!("Could not read or write a file: {}", e),
            CheckError::CsvError(e) => format!("Could not write the report: {}", e),
            CheckError::SerializationError(e) => format!("Could not render the tally: {}", e),
            CheckError::TomlParseError(e) => format!("Rules file is not valid TOML: {}", e),
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input path exists and is readable",
            ErrorCategory::Output => "Check that the report directory is writable",
            ErrorCategory::Configuration => "Fix the rules file or command line arguments",
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Location,
    Club,
    Player,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupKind::Location => "location",
            LookupKind::Club => "club",
            LookupKind::Player => "player",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum GolfError {
    #[error("Cannot open input file '{path}': {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line_number} has {field_count} fields, expected 4")]
    StructuralError {
        line_number: usize,
        field_count: usize,
    },

    #[error("Line {line_number} has an empty value in field {field_index}")]
    EmptyFieldError {
        line_number: usize,
        field_index: usize,
    },

    #[error("Line {line_number} is not valid UTF-8")]
    InvalidEncoding { line_number: usize },

    #[error("Line {line_number} has a non-numeric score: {value}")]
    InvalidScore { line_number: usize, value: String },

    #[error("Unknown {kind}: {name}")]
    NotFound { kind: LookupKind, name: String },

    #[error("Wrong number of arguments for command: {command}")]
    UsageError { command: String },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Query,
    Command,
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

impl GolfError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GolfError::FileUnreadable { .. }
            | GolfError::StructuralError { .. }
            | GolfError::EmptyFieldError { .. }
            | GolfError::InvalidEncoding { .. }
            | GolfError::InvalidScore { .. } => ErrorCategory::Load,
            GolfError::NotFound { .. } => ErrorCategory::Query,
            GolfError::UsageError { .. } | GolfError::UnknownCommand { .. } => {
                ErrorCategory::Command
            }
            GolfError::ConfigError { .. } | GolfError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            GolfError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Query | ErrorCategory::Command => ErrorSeverity::Low,
            ErrorCategory::Load | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Fatal errors end the run; the rest are reported and the session goes on.
    pub fn is_fatal(&self) -> bool {
        self.severity() >= ErrorSeverity::High
    }

    /// The single diagnostic line shown to the user for this failure.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GolfError::FileUnreadable { .. } => {
                "Error: The specified file cannot be opened!".to_string()
            }
            GolfError::StructuralError { .. }
            | GolfError::InvalidEncoding { .. }
            | GolfError::InvalidScore { .. } => {
                "Error: The specified file has an erroneous line!".to_string()
            }
            GolfError::EmptyFieldError { .. } => "Error: A line has an empty value!".to_string(),
            GolfError::NotFound { kind, .. } => match kind {
                LookupKind::Location => "Error: The given location not found!".to_string(),
                LookupKind::Club => "Error: The given club not found!".to_string(),
                LookupKind::Player => "Error: The player hasn't played any rounds!".to_string(),
            },
            GolfError::UsageError { command } => format!("Error: In command: {}", command),
            GolfError::UnknownCommand { command } => format!("Error: Unknown command: {}", command),
            GolfError::IoError(e) => format!("Error: {}", e),
            GolfError::ConfigError { .. } | GolfError::InvalidConfigValueError { .. } => {
                format!("Error: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GolfError::FileUnreadable { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            GolfError::StructuralError { line_number, .. } => format!(
                "Line {} must look like location;club;player;score (quote fields containing ';')",
                line_number
            ),
            GolfError::EmptyFieldError { line_number, .. } => {
                format!("Fill in every field on line {}", line_number)
            }
            GolfError::InvalidEncoding { line_number } => {
                format!("Save the file as UTF-8 (line {} holds other bytes)", line_number)
            }
            GolfError::InvalidScore { line_number, .. } => {
                format!("The score on line {} must be a whole number", line_number)
            }
            GolfError::NotFound { kind, .. } => {
                format!("Use 'places' to see which {} names are known", kind)
            }
            GolfError::UsageError { .. } | GolfError::UnknownCommand { .. } => {
                "Commands: places, clubs <location>, rounds <club>, played <player>, compare <player1> <player2>, quit".to_string()
            }
            GolfError::IoError(_) => "Check that the output stream is still open".to_string(),
            GolfError::ConfigError { .. } | GolfError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GolfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_errors_are_fatal() {
        let err = GolfError::StructuralError {
            line_number: 3,
            field_count: 2,
        };
        assert_eq!(err.category(), ErrorCategory::Load);
        assert!(err.is_fatal());
        assert_eq!(
            err.user_friendly_message(),
            "Error: The specified file has an erroneous line!"
        );
    }

    #[test]
    fn test_query_errors_are_recoverable() {
        let err = GolfError::NotFound {
            kind: LookupKind::Club,
            name: "Nowhere".to_string(),
        };
        assert!(!err.is_fatal());
        assert_eq!(err.user_friendly_message(), "Error: The given club not found!");

        let err = GolfError::UnknownCommand {
            command: "foo".to_string(),
        };
        assert!(!err.is_fatal());
        assert_eq!(err.user_friendly_message(), "Error: Unknown command: foo");
    }

    #[test]
    fn test_usage_error_names_command() {
        let err = GolfError::UsageError {
            command: "compare".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Error: In command: compare");
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }
}

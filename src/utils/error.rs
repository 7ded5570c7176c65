use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Restaurant not found: {name}")]
    RestaurantNotFound { name: String },

    #[error("Menu item not found: {name}")]
    ItemNotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Business "not found" condition, the caller can retry with another name.
    Low,
    /// Bad input file or argument.
    High,
    /// The environment itself failed (filesystem, encoder).
    Critical,
}

impl ErrorSeverity {
    /// Process exit code reported by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DirectoryError::RestaurantNotFound { .. } | DirectoryError::ItemNotFound { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DirectoryError::RestaurantNotFound { .. } | DirectoryError::ItemNotFound { .. } => {
                ErrorSeverity::Low
            }
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DirectoryError::IoError(_) | DirectoryError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DirectoryError::RestaurantNotFound { .. } => {
                "Run `list` to see the restaurants in the directory".to_string()
            }
            DirectoryError::ItemNotFound { .. } => {
                "Run `menu <RESTAURANT>` to see the exact item names (they are case-sensitive)"
                    .to_string()
            }
            DirectoryError::IoError(_) => {
                "Check that the seed file exists and is readable".to_string()
            }
            DirectoryError::SerializationError(_) => "Retry without --json".to_string(),
            DirectoryError::ConfigValidationError { field, .. }
            | DirectoryError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::RestaurantNotFound { name } => {
                format!("No restaurant named \"{}\"", name)
            }
            DirectoryError::ItemNotFound { name } => {
                format!("\"{}\" is not on the menu", name)
            }
            DirectoryError::IoError(e) => format!("Could not read the seed file: {}", e),
            DirectoryError::SerializationError(e) => format!("Could not encode output: {}", e),
            DirectoryError::ConfigValidationError { message, .. } => {
                format!("The seed file is invalid: {}", message)
            }
            DirectoryError::InvalidConfigValueError { value, reason, .. } => {
                format!("Invalid value \"{}\": {}", value, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_errors_are_low_severity() {
        let err = DirectoryError::RestaurantNotFound {
            name: "Dominos".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.to_string(), "Restaurant not found: Dominos");

        let err = DirectoryError::ItemNotFound {
            name: "French fries".to_string(),
        };
        assert!(err.is_not_found());
        assert!(err.user_friendly_message().contains("French fries"));
    }

    #[test]
    fn test_config_errors_point_at_field() {
        let err = DirectoryError::InvalidConfigValueError {
            field: "restaurants[0].opening_time".to_string(),
            value: "25:00".to_string(),
            reason: "not a time of day".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.recovery_suggestion(),
            "Fix the value of 'restaurants[0].opening_time'"
        );
    }

    #[test]
    fn test_command_line_value_suggestion_does_not_mention_seed_file() {
        let err = DirectoryError::InvalidConfigValueError {
            field: "at".to_string(),
            value: "2pm".to_string(),
            reason: "Expected a time of day as HH:MM:SS or HH:MM".to_string(),
        };
        assert_eq!(err.recovery_suggestion(), "Fix the value of 'at'");
        assert!(!err.recovery_suggestion().contains("seed file"));
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let not_found = DirectoryError::RestaurantNotFound {
            name: "Dominos".to_string(),
        };
        let bad_value = DirectoryError::InvalidConfigValueError {
            field: "at".to_string(),
            value: "2pm".to_string(),
            reason: "not a time of day".to_string(),
        };
        let bad_toml = DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected `=`".to_string(),
        };
        let io = DirectoryError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));

        assert_eq!(not_found.severity().exit_code(), 2);
        assert_eq!(bad_value.severity().exit_code(), 1);
        assert_eq!(bad_toml.severity().exit_code(), 1);
        assert_eq!(io.severity().exit_code(), 3);

        assert_eq!(ErrorSeverity::Low.exit_code(), 2);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }
}

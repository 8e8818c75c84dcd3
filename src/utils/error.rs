use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file '{path}' not found")]
    InputNotFound { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid classifier pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InputNotFound { path } => {
                format!("Error: Input file '{}' not found.", path)
            }
            ConvertError::CsvError(e) => format!("Could not read or write CSV data: {}", e),
            ConvertError::IoError(e) => format!("File system error: {}", e),
            ConvertError::TomlError(e) => format!("Settings file is not valid TOML: {}", e),
            ConvertError::PatternError(e) => format!("Fax label pattern is invalid: {}", e),
            ConvertError::ConfigError { message } => format!("Settings error: {}", message),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::InputNotFound { .. } => {
                "Check the --input path or place sample.csv in the working directory"
            }
            ConvertError::CsvError(_) => {
                "Make sure the input is UTF-8 encoded CSV with a header row"
            }
            ConvertError::IoError(_) => "Check file permissions and free disk space",
            ConvertError::TomlError(_) | ConvertError::ConfigError { .. } => {
                "Fix the settings file or run without --config to use defaults"
            }
            ConvertError::PatternError(_) => "Use a valid regular expression for classifier.pattern",
            ConvertError::InvalidConfigValueError { .. } => {
                "Correct the listed setting and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message() {
        let err = ConvertError::InputNotFound {
            path: "sample.csv".to_string(),
        };
        assert_eq!(err.to_string(), "Input file 'sample.csv' not found");
        assert_eq!(
            err.user_friendly_message(),
            "Error: Input file 'sample.csv' not found."
        );
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = ConvertError::InvalidConfigValueError {
            field: "phones.slots".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 16".to_string(),
        };
        assert!(err.user_friendly_message().contains("phones.slots"));
        assert!(err.to_string().contains("'0'"));
    }
}

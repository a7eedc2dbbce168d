use crate::sat_bands::DateCoverageError;

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    DateOrder,
    DateParse(chrono::ParseError),
    Threshold,
    Coverage(DateCoverageError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DateOrder => write!(f, "date2 cannot be earlier than date1"),
            ConfigError::DateParse(e) => write!(f, "Failed to parse date: {}", e),
            ConfigError::Threshold => write!(
                f,
                "mndwi_threshold and ndwi_threshold must be between -1 and 1"
            ),
            ConfigError::Coverage(e) => write!(f, "{}", e),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<chrono::ParseError> for ConfigError {
    fn from(err: chrono::ParseError) -> ConfigError {
        ConfigError::DateParse(err)
    }
}

impl From<DateCoverageError> for ConfigError {
    fn from(err: DateCoverageError) -> ConfigError {
        ConfigError::Coverage(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl ListError {
    /// 配置類錯誤在執行任何檔案系統操作前就會被攔下
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ListError::TomlParseError(_)
                | ListError::ConfigError { .. }
                | ListError::InvalidConfigValueError { .. }
                | ListError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ListError::IoError(e) => format!("Filesystem operation failed: {}", e),
            ListError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            ListError::TomlParseError(e) => format!("Could not parse config file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ListError::IoError(_) => {
                "Check that the examples directory exists and is readable from the current working directory"
            }
            ListError::SerializationError(_) => "Retry with --format markdown",
            ListError::TomlParseError(_) | ListError::ConfigError { .. } => {
                "Review the config file against the documented [source]/[render]/[output] sections"
            }
            ListError::InvalidConfigValueError { .. } | ListError::MissingConfigError { .. } => {
                "Fix the reported field and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;

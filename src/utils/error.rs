use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillBridgeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Action '{action}' is not available while {state}")]
    InvalidActionError { action: String, state: String },

    #[error("Cannot understand '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Configuration,
    UserInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SkillBridgeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. }
            | Self::InvalidActionError { .. }
            | Self::CommandError { .. } => ErrorCategory::UserInput,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 使用者輸入錯誤在畫面上提示即可
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否可以在互動畫面中就地恢復
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write data: {}", e),
            Self::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            Self::ValidationError { message } => message.clone(),
            Self::InvalidActionError { action, state } => {
                format!("You cannot '{}' while {}.", action, state)
            }
            Self::CommandError { input, reason } => format!("'{}': {}", input, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check file permissions and that the path exists",
            Self::SerializationError(_) => "Retry without --json",
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            Self::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the configuration file"
            }
            Self::ValidationError { .. } => "Enter both an email and a password",
            Self::InvalidActionError { .. } => "Type 'help' to see the actions for this screen",
            Self::CommandError { .. } => "Type 'help' to list the available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkillBridgeError>;

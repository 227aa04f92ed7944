use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Expected an integer but read '{token}'")]
    ParseError { token: String },

    #[error("Input ended before the loop finished")]
    UnexpectedEof,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LoopError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LoopError::IoError(e) => format!("Could not read or write the console: {}", e),
            LoopError::ParseError { token } => {
                format!("'{}' is not a whole number, stopping.", token)
            }
            LoopError::UnexpectedEof => "No more input, stopping.".to_string(),
            LoopError::ConfigError { message } => format!("Bad configuration: {}", message),
            LoopError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration for {}: {}", field, reason)
            }
        }
    }

    /// 對應的行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            LoopError::ConfigError { .. } | LoopError::InvalidConfigValueError { .. } => 1,
            LoopError::ParseError { .. } => 2,
            LoopError::UnexpectedEof => 3,
            LoopError::IoError(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoopError>;

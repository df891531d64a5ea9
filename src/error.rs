use std::io;
use thiserror::Error;

/// Custom error type for the check-postqueue plugin
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("failed to execute postqueue command. exitCode: {exit_code:?}, Stdout: '{stdout}', Stderr: '{stderr}'")]
    CommandExecution {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for the check-postqueue plugin
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CheckError::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        CheckError::Validation(msg.into())
    }
}

impl From<regex::Error> for CheckError {
    fn from(err: regex::Error) -> Self {
        CheckError::Config(format!("invalid category pattern: {}", err))
    }
}

impl From<toml::de::Error> for CheckError {
    fn from(err: toml::de::Error) -> Self {
        CheckError::Config(format!(
            "an error occurred while decoding TOML format file: {}",
            err
        ))
    }
}

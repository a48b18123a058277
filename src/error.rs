use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Availability API error: {0}")]
    #[diagnostic(code(surfdash::api))]
    Api(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(surfdash::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(surfdash::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(surfdash::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(surfdash::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(surfdash::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type DashResult<T> = Result<T, Error>;

/// Helper to create environment errors
#[allow(dead_code)]
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create availability API errors
pub fn api_error(message: &str) -> Error {
    Error::Api(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}

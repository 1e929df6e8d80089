use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application.
///
/// The ICS decoder has no variant here on purpose: it is a total function
/// with no error channel.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(roomboard::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(roomboard::config))]
    Config(String),

    #[error("Calendar feed error: {0}")]
    #[diagnostic(code(roomboard::feed))]
    Feed(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(roomboard::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(roomboard::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(roomboard::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(roomboard::other))]
    Other(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BoardResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create calendar feed errors
pub fn feed_error(message: &str) -> Error {
    Error::Feed(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}

//! Error types for building matcher configurations and reading properties

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while setting up a [`crate::config::MatcherConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  /// No expected object was supplied to the builder
  #[error("expected object must not be None")]
  MissingExpected,
}

/// Failure to read a property from the actual object during matching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
  /// The accessor panicked
  #[error("could not be read: {message}")]
  Panicked { message: String },
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn errors_render_readable_messages() {
    assert_eq!(ConfigError::MissingExpected.to_string(), "expected object must not be None");
    assert_eq!(
      AccessError::Panicked {
        message: "boom".to_string()
      }
      .to_string(),
      "could not be read: boom"
    );
  }
}

#![forbid(unsafe_code)]

//! Error types.

use thiserror::Error;

/// Result alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or validating a [`CarouselConfig`](crate::config::CarouselConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[cfg(feature = "config-files")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[cfg(feature = "config-files")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more fields are out of range.
    #[error("invalid carousel config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_problems() {
        let err = ConfigError::Validation(vec!["a must be > 0".into(), "b must be > 0".into()]);
        assert_eq!(
            err.to_string(),
            "invalid carousel config: a must be > 0; b must be > 0"
        );
    }
}

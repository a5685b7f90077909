//! Error types for the social agent

use social_types::ParseError;
use thiserror::Error;

/// Main error type for all social agent operations
#[derive(Error, Debug)]
pub enum SocialError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed: {0}")]
    Parse(#[from] ParseError),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl SocialError {
    /// Storage and configuration faults abort the process; business-rule
    /// rejections are reported and the command returns normally.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Validation(_) | Self::Parse(_) | Self::NotFound(_))
    }
}

/// Result type for social agent operations
pub type Result<T> = std::result::Result<T, SocialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(!SocialError::Validation("empty topic".to_string()).is_fatal());
        assert!(!SocialError::Parse(social_types::ParseError::UnknownStatus("cancelled".to_string())).is_fatal());
        assert!(SocialError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk")).is_fatal());
        assert!(SocialError::Deserialization("broken record".to_string()).is_fatal());
    }
}

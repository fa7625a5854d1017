//! Error handling for alignment configuration
//!
//! Alignment itself cannot fail: every character classifies into some
//! category because the fallback always exists after normalization. The
//! only fallible operation in the crate is compiling a caller-supplied
//! matcher pattern.

use std::fmt;

/// Alignment configuration error type
#[derive(Debug, Clone)]
pub enum AlignError {
    /// A matcher pattern failed to compile
    InvalidPattern { pattern: String, message: String },
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid matcher pattern '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for AlignError {}

// Convenience constructors for errors
impl AlignError {
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        AlignError::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Result type for configuration operations
pub type AlignResult<T> = Result<T, AlignError>;

//! Error types for voltage-eic

use thiserror::Error;

/// EIC errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EicError {
    /// Wrong length, illegal character or unknown type discriminator
    #[error("Invalid EIC format: {0}")]
    InvalidFormat(String),

    /// Prefix cannot be fed to the check character calculation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Check character mismatch: expected '{expected}', found '{actual}'")]
    CheckCharMismatch { expected: char, actual: char },
}

impl EicError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EicError>;

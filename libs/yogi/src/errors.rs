//! Error type of the binding

use crate::library;
use thiserror::Error;

/// Error returned by operations of the core library
///
/// Carries the numeric result code together with the description the core
/// library reports for it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{description} (error code {code})")]
pub struct Error {
    code: i32,
    description: String,
}

impl Error {
    /// Build an error from a raw core result code.
    pub fn from_code(code: i32) -> Self {
        Self {
            code,
            description: library::error_string(code).to_string(),
        }
    }

    /// Numeric result code (always negative for real errors).
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Description the core library associates with the code.
    pub fn description(&self) -> &str {
        &self.description
    }
}

pub type Result<T> = std::result::Result<T, Error>;

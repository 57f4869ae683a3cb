//! # Error Types
//!
//! Structured error types for bearing_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::errors::{CalcError, CalcResult};
//!
//! fn validate_speed(speed_rpm: f64) -> CalcResult<()> {
//!     if speed_rpm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "speed_rpm".to_string(),
//!             value: speed_rpm.to_string(),
//!             reason: "Rotational speed must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bearing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// The engine is a pure calculation, so the only failure mode is an input
/// that makes the arithmetic undefined. The variant carries enough context
/// for programmatic handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, degenerate geometry, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

//! # Error Types
//!
//! Structured error types for foundation_core. Parameter-level variants carry
//! the exact operator-facing message in their `Display` output, so
//! `err.to_string()` is what a caller shows next to the input form.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::errors::{CalcError, CalcResult};
//!
//! fn require_depth(depth_m: f64) -> CalcResult<()> {
//!     if depth_m < 0.0 {
//!         return Err(CalcError::negative_value("buried_depth"));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_depth(-0.5).unwrap_err();
//! assert_eq!(err.to_string(), "parameter buried_depth cannot be negative");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for foundation_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for parameter handling.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A field listed as required is absent from the parameter set
    #[error("missing required parameter: {field}")]
    MissingParameter { field: String },

    /// A field expected to be numeric could not be read as a number
    #[error("parameter {field} is not a valid number")]
    NotANumber { field: String },

    /// A numeric field that must be non-negative holds a negative value
    #[error("parameter {field} cannot be negative")]
    NegativeValue { field: String },

    /// No unit family contains both units
    #[error("no conversion from {from} to {to}")]
    UnsupportedConversion { from: String, to: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a MissingParameter error
    pub fn missing_parameter(field: impl Into<String>) -> Self {
        CalcError::MissingParameter { field: field.into() }
    }

    /// Create a NotANumber error
    pub fn not_a_number(field: impl Into<String>) -> Self {
        CalcError::NotANumber { field: field.into() }
    }

    /// Create a NegativeValue error
    pub fn negative_value(field: impl Into<String>) -> Self {
        CalcError::NegativeValue { field: field.into() }
    }

    /// Create an UnsupportedConversion error
    pub fn unsupported_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        CalcError::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// True for errors that describe a problem with the parameter values
    /// themselves rather than with storage or unit lookup.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::MissingParameter { .. } | CalcError::NotANumber { .. } | CalcError::NegativeValue { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingParameter { .. } => "MISSING_PARAMETER",
            CalcError::NotANumber { .. } => "NOT_A_NUMBER",
            CalcError::NegativeValue { .. } => "NEGATIVE_VALUE",
            CalcError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

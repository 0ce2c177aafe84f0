//! # Error Types
//!
//! Structured error types for gauge_core. Errors carry enough context for a
//! form layer to highlight the offending field, or for a content pipeline to
//! point at the broken document.
//!
//! "Not found" is never an error here: registry and content lookups return
//! `Option` and leave the user-facing behavior to the caller.
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::errors::{GaugeError, GaugeResult};
//!
//! fn require_positive(weight_kg: f64) -> GaugeResult<()> {
//!     if weight_kg <= 0.0 {
//!         return Err(GaugeError::invalid_input(
//!             "weight",
//!             weight_kg.to_string(),
//!             "Weight must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gauge_core operations
pub type GaugeResult<T> = Result<T, GaugeError>;

/// A single failed field in a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as declared by the calculator's input schema
    pub field: String,
    /// Human-readable message, ready to show next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Structured error type for gauge_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GaugeError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A form submission failed validation on one or more fields
    #[error("Validation failed for {} field(s)", .errors.len())]
    Validation { errors: Vec<FieldError> },

    /// A content document could not be parsed
    #[error("Content error in '{path}': {reason}")]
    ContentParse { path: String, reason: String },

    /// Two content documents share a slug
    #[error("Duplicate post slug: {slug}")]
    DuplicateSlug { slug: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Site configuration could not be parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },
}

impl GaugeError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GaugeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        GaugeError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ContentParse error
    pub fn content_parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        GaugeError::ContentParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        GaugeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        GaugeError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Per-field errors, if this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            GaugeError::Validation { errors } => errors,
            _ => &[],
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GaugeError::InvalidInput { .. } => "INVALID_INPUT",
            GaugeError::MissingField { .. } => "MISSING_FIELD",
            GaugeError::Validation { .. } => "VALIDATION_FAILED",
            GaugeError::ContentParse { .. } => "CONTENT_PARSE",
            GaugeError::DuplicateSlug { .. } => "DUPLICATE_SLUG",
            GaugeError::FileError { .. } => "FILE_ERROR",
            GaugeError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}

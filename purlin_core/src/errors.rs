//! # Error Types
//!
//! Structured error types for purlin_core.
//!
//! Editors never abort: a rejected edit comes back as `Err(PurlinError)` and the
//! record it targeted is left exactly as it was. The GUI logs them and shows the
//! message in its status bar; the CLI prints them as JSON.
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::errors::{PurlinError, PurlinResult};
//!
//! fn validate_percentage(value: f64) -> PurlinResult<f64> {
//!     if !(0.0..=100.0).contains(&value) {
//!         return Err(PurlinError::invalid_input(
//!             "left_percentage",
//!             value.to_string(),
//!             "Percentage must be between 0 and 100",
//!         ));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(validate_percentage(150.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for purlin_core operations
pub type PurlinResult<T> = Result<T, PurlinError>;

/// Structured error type for editor and service operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PurlinError {
    /// An input value is outside its domain (percentage > 100, length <= 0, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A list already holds its maximum number of entries
    #[error("{list} is full (max. {max})")]
    CapacityReached { list: String, max: usize },

    /// An action needs a selected entry but nothing is selected
    #[error("No entry selected in {list}")]
    NoSelection { list: String },

    /// The field exists but is not editable in the record's current state
    #[error("Field '{field}' is disabled: {reason}")]
    FieldDisabled { field: String, reason: String },

    /// Material data source failed
    #[error("Failed to fetch materials")]
    MaterialFetch { reason: String },

    /// Material id not present in the catalogue
    #[error("Material not found: {id}")]
    MaterialNotFound { id: String },

    /// Environment or settings value could not be understood
    #[error("Invalid configuration '{key}': {reason}")]
    Config { key: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PurlinError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PurlinError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CapacityReached error
    pub fn capacity_reached(list: impl Into<String>, max: usize) -> Self {
        PurlinError::CapacityReached {
            list: list.into(),
            max,
        }
    }

    /// Create a NoSelection error
    pub fn no_selection(list: impl Into<String>) -> Self {
        PurlinError::NoSelection { list: list.into() }
    }

    /// Create a FieldDisabled error
    pub fn field_disabled(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PurlinError::FieldDisabled {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialFetch error
    pub fn material_fetch(reason: impl Into<String>) -> Self {
        PurlinError::MaterialFetch {
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(id: impl Into<String>) -> Self {
        PurlinError::MaterialNotFound { id: id.into() }
    }

    /// Create a Config error
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        PurlinError::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that only mean "this edit was not applied".
    ///
    /// These are the silent no-ops of the form editors; everything else is a
    /// genuine failure worth surfacing.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            PurlinError::InvalidInput { .. }
                | PurlinError::CapacityReached { .. }
                | PurlinError::NoSelection { .. }
                | PurlinError::FieldDisabled { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PurlinError::InvalidInput { .. } => "INVALID_INPUT",
            PurlinError::CapacityReached { .. } => "CAPACITY_REACHED",
            PurlinError::NoSelection { .. } => "NO_SELECTION",
            PurlinError::FieldDisabled { .. } => "FIELD_DISABLED",
            PurlinError::MaterialFetch { .. } => "MATERIAL_FETCH",
            PurlinError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            PurlinError::Config { .. } => "CONFIG",
            PurlinError::SerializationError { .. } => "SERIALIZATION_ERROR",
            PurlinError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for PurlinError {
    fn from(err: serde_json::Error) -> Self {
        PurlinError::SerializationError {
            reason: err.to_string(),
        }
    }
}

//! Error types for the menu-catalog crate.
//!
//! Candidate items are rejected with [`ValidationError`]; seed menus report
//! [`SeedError`]. Both follow the `thiserror` conventions used across the
//! workspace.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a candidate menu item is refused admission to the catalog.
///
/// Each variant carries enough context to render a human-readable message
/// that can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty once trimmed.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// No course was selected for the item.
    #[error("a course must be selected")]
    MissingCourse,

    /// The price text could not be read as a finite decimal number.
    #[error("price '{value}' is not a valid number")]
    InvalidPrice {
        /// Trimmed price text as entered.
        value: String,
    },

    /// The price was below zero.
    #[error("price must not be negative (got {value})")]
    NegativePrice {
        /// Trimmed price text as entered.
        value: String,
    },

    /// The strict price policy is active and the price was zero.
    #[error("price must be greater than zero (got {value})")]
    NonPositivePrice {
        /// Trimmed price text as entered.
        value: String,
    },
}

/// A course label did not match any known course.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course '{label}'")]
pub struct UnknownCourse {
    /// The label that failed to parse.
    pub label: String,
}

/// Errors raised while loading a seed menu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed menu at '{path}': {message}")]
    IoError {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed JSON is malformed or missing required fields.
    #[error("invalid seed menu JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The seed menu version is not supported.
    #[error("unsupported seed menu version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the file.
        actual: u32,
    },

    /// The seed menu lists no items.
    #[error("seed menu contains no items")]
    EmptyItems,

    /// An id was empty or padded with whitespace.
    #[error("seed item at index {index} has an invalid id '{id}'")]
    InvalidId {
        /// Index of the item in the `items` array.
        index: usize,
        /// The rejected id.
        id: String,
    },

    /// Two items share the same id.
    #[error("seed item at index {index} reuses id '{id}'")]
    DuplicateId {
        /// Index of the second occurrence.
        index: usize,
        /// The repeated id.
        id: String,
    },

    /// An item failed field validation.
    #[error("seed item at index {index} is invalid: {source}")]
    InvalidItem {
        /// Index of the item in the `items` array.
        index: usize,
        /// Underlying validation failure.
        #[source]
        source: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_formats_correctly() {
        let err = ValidationError::EmptyField { field: "name" };
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn missing_course_formats_correctly() {
        assert_eq!(
            ValidationError::MissingCourse.to_string(),
            "a course must be selected"
        );
    }

    #[test]
    fn invalid_price_formats_correctly() {
        let err = ValidationError::InvalidPrice {
            value: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), "price 'abc' is not a valid number");
    }

    #[test]
    fn negative_price_formats_correctly() {
        let err = ValidationError::NegativePrice {
            value: "-5".to_owned(),
        };
        assert_eq!(err.to_string(), "price must not be negative (got -5)");
    }

    #[test]
    fn unknown_course_formats_correctly() {
        let err = UnknownCourse {
            label: "Brunch".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown course 'Brunch'");
    }

    #[test]
    fn seed_io_error_formats_correctly() {
        let err = SeedError::IoError {
            path: PathBuf::from("/tmp/menu.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read seed menu at '/tmp/menu.json': file not found"
        );
    }

    #[test]
    fn seed_invalid_item_includes_reason() {
        let err = SeedError::InvalidItem {
            index: 3,
            source: ValidationError::EmptyField {
                field: "description",
            },
        };
        assert_eq!(
            err.to_string(),
            "seed item at index 3 is invalid: description must not be empty"
        );
    }
}

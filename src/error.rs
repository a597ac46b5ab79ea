//! Error types for provider configuration.
//!
//! This module contains error types used when constructing and validating
//! a [`ProviderConfig`](crate::ProviderConfig).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_provider::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not-a-url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during provider configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http:// or https:// URL.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Update method string is not recognized.
    #[error("Invalid update method '{value}'. Expected 'PATCH' or 'PUT'.")]
    InvalidUpdateMethod {
        /// The invalid method string that was provided.
        value: String,
    },

    /// Array format string is not recognized.
    #[error("Invalid array format '{value}'. Expected 'repeat', 'brackets', 'indices' or 'comma'.")]
    InvalidArrayFormat {
        /// The invalid format string that was provided.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

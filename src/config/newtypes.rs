//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API base URL.
///
/// This newtype ensures the base URL is an absolute `http://` or `https://`
/// URL and normalizes it by stripping any trailing slashes, so request URLs
/// can be composed with a single `/` between segments.
///
/// # Example
///
/// ```rust
/// use jsonapi_provider::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.com/v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// Trailing `/` characters are stripped during normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty or does
    /// not start with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim();

        if url.is_empty() {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
            });
        }

        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        if !has_scheme {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
            });
        }

        let normalized = url.trim_end_matches('/');

        // "https://" alone normalizes to an empty authority
        let rest = normalized
            .strip_prefix("https://")
            .or_else(|| normalized.strip_prefix("http://"))
            .unwrap_or_default();
        if rest.is_empty() {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
            });
        }

        Ok(Self(normalized.to_string()))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let url = String::deserialize(deserializer)?;
        Self::new(url).map_err(de::Error::custom)
    }
}

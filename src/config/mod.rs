//! Configuration types for the JSON:API provider.
//!
//! This module provides the core configuration types used to initialize
//! the provider for communication with a JSON:API backend.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ProviderConfig`]: The main configuration struct holding all provider settings
//! - [`ProviderConfigBuilder`]: A builder for constructing [`ProviderConfig`] instances
//! - [`BaseUrl`]: A validated API base URL newtype
//! - [`UpdateMethod`]: The HTTP verb used for update requests
//! - [`ArrayFormat`]: The serialization style for multi-value filters
//!
//! Every option other than `base_url` has a documented default; unset
//! options fall back silently. There is no deep merge of arbitrary nested
//! structures — the recognized option set is fixed.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_provider::{ArrayFormat, BaseUrl, ProviderConfig, UpdateMethod};
//!
//! let config = ProviderConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .header("Authorization", "Bearer token")
//!     .update_method(UpdateMethod::Put)
//!     .array_format(ArrayFormat::Comma)
//!     .total_field("count")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod options;

pub use newtypes::BaseUrl;
pub use options::{ArrayFormat, UpdateMethod};

use std::collections::HashMap;

use crate::error::ConfigError;

/// Configuration for the JSON:API provider.
///
/// This struct holds all settings needed to translate requests, including
/// the backend base URL, extra headers, and the response-mapping options.
///
/// # Thread Safety
///
/// `ProviderConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use jsonapi_provider::{BaseUrl, ProviderConfig, UpdateMethod};
///
/// let config = ProviderConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.update_method(), UpdateMethod::Patch);
/// assert_eq!(config.get_many_key(), "id");
/// ```
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    base_url: BaseUrl,
    headers: HashMap<String, String>,
    update_method: UpdateMethod,
    array_format: ArrayFormat,
    total_field: Option<String>,
    get_many_key: String,
    user_agent_prefix: Option<String>,
}

impl ProviderConfig {
    /// Creates a new builder for constructing a `ProviderConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonapi_provider::{BaseUrl, ProviderConfig};
    ///
    /// let config = ProviderConfig::builder()
    ///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the extra headers merged into every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the HTTP verb used for update requests.
    #[must_use]
    pub const fn update_method(&self) -> UpdateMethod {
        self.update_method
    }

    /// Returns the serialization style for multi-value filters.
    #[must_use]
    pub const fn array_format(&self) -> ArrayFormat {
        self.array_format
    }

    /// Returns the meta field name to read item counts from, if configured.
    ///
    /// Dotted paths (e.g. `"page.total"`) address nested meta fields. When
    /// unset, list totals fall back to the number of returned records.
    #[must_use]
    pub fn total_field(&self) -> Option<&str> {
        self.total_field.as_deref()
    }

    /// Returns the filter key used for batched-id lookups.
    #[must_use]
    pub fn get_many_key(&self) -> &str {
        &self.get_many_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ProviderConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProviderConfig>();
};

/// Builder for constructing [`ProviderConfig`] instances.
///
/// This builder provides a fluent API for configuring the provider. The only
/// required field is `base_url`. All other fields have documented defaults.
///
/// # Defaults
///
/// - `headers`: empty
/// - `update_method`: [`UpdateMethod::Patch`]
/// - `array_format`: [`ArrayFormat::Repeat`]
/// - `total_field`: `None` (fall back to counting returned records)
/// - `get_many_key`: `"id"`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use jsonapi_provider::{ArrayFormat, BaseUrl, ProviderConfig};
///
/// let config = ProviderConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .array_format(ArrayFormat::Brackets)
///     .get_many_key("ids")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    base_url: Option<BaseUrl>,
    headers: HashMap<String, String>,
    update_method: Option<UpdateMethod>,
    array_format: Option<ArrayFormat>,
    total_field: Option<String>,
    get_many_key: Option<String>,
    user_agent_prefix: Option<String>,
}

impl ProviderConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets all extra headers at once, replacing any previously added.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the HTTP verb used for update requests.
    #[must_use]
    pub const fn update_method(mut self, method: UpdateMethod) -> Self {
        self.update_method = Some(method);
        self
    }

    /// Sets the serialization style for multi-value filters.
    #[must_use]
    pub const fn array_format(mut self, format: ArrayFormat) -> Self {
        self.array_format = Some(format);
        self
    }

    /// Sets the meta field name to read item counts from.
    ///
    /// Dotted paths address nested meta fields, e.g. `"page.total"` reads
    /// `meta.page.total` from list responses.
    #[must_use]
    pub fn total_field(mut self, field: impl Into<String>) -> Self {
        self.total_field = Some(field.into());
        self
    }

    /// Sets the filter key used for batched-id lookups.
    #[must_use]
    pub fn get_many_key(mut self, key: impl Into<String>) -> Self {
        self.get_many_key = Some(key.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ProviderConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ProviderConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(ProviderConfig {
            base_url,
            headers: self.headers,
            update_method: self.update_method.unwrap_or_default(),
            array_format: self.array_format.unwrap_or_default(),
            total_field: self.total_field,
            get_many_key: self.get_many_key.unwrap_or_else(|| "id".to_string()),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

//! Provider-level error types.
//!
//! This module contains the unified error type returned by every provider
//! operation. Transport failures pass through unmodified from the HTTP
//! layer; there is no retry or partial-failure recovery.

use thiserror::Error;

use crate::clients::HttpError;
use crate::provider::params::RequestKind;

/// Unified error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request kind string is not part of the supported enumeration.
    ///
    /// Raised before any request is built or sent; carries the offending
    /// kind string.
    #[error("Unsupported request type: {kind}")]
    UnsupportedRequestType {
        /// The unrecognized kind string.
        kind: String,
    },

    /// The supplied parameters do not belong to the named request kind.
    #[error("Parameters do not match request type {kind}")]
    ParamsMismatch {
        /// The request kind that was named.
        kind: RequestKind,
    },

    /// A transport failure: network error, non-success status or request
    /// validation failure. Propagated from the HTTP layer unmodified.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body could not be decoded as the expected JSON:API
    /// document shape (e.g. a resource object without an `id`).
    #[error("Failed to decode response document: {0}")]
    Decode(#[from] serde_json::Error),
}

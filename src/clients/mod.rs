//! HTTP client types for JSON:API backend communication.
//!
//! This module provides the transport layer underneath the provider. It
//! handles request validation, URL construction, header merging and
//! response parsing. There is no retry or backoff at this layer: one
//! request in, one response out.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for backend communication
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A parsed response from the backend
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use jsonapi_provider::clients::{HttpClient, HttpRequest, HttpMethod};
//! use jsonapi_provider::{BaseUrl, ProviderConfig};
//!
//! let config = ProviderConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "posts")
//!     .query_param("page[number]", "1")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, JSONAPI_MEDIA_TYPE, PROVIDER_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

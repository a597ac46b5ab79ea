//! # JSON:API Provider
//!
//! A Rust data provider for JSON:API backends. It translates abstract CRUD
//! request kinds (list, get-one, create, update, delete, batched variants)
//! into HTTP requests conforming to the JSON:API resource convention, and
//! normalizes the response documents back into the flat `{id, ...attributes}`
//! records data-oriented frontends expect.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ProviderConfig`] and [`ProviderConfigBuilder`]
//! - A validated [`BaseUrl`] newtype and closed option sets
//!   ([`UpdateMethod`], [`ArrayFormat`])
//! - One typed method per request kind on [`DataProvider`], plus a dynamic
//!   string-keyed [`DataProvider::dispatch`] entry point
//! - Sparse-fieldset support driven by injected [`ColumnPreferences`]
//! - An async HTTP layer in [`clients`] with single-attempt semantics
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_provider::{BaseUrl, DataProvider, ProviderConfig};
//!
//! let config = ProviderConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
//!     .header("Authorization", "Bearer token")
//!     .build()
//!     .unwrap();
//!
//! let provider = DataProvider::new(config);
//! ```
//!
//! ## Fetching a List
//!
//! ```rust,ignore
//! use jsonapi_provider::{GetListParams, Pagination, Sort};
//!
//! let result = provider
//!     .get_list(
//!         "posts",
//!         GetListParams {
//!             pagination: Some(Pagination::new(1, 25)),
//!             sort: Some(Sort::desc("published_at")),
//!             filter: serde_json::Map::new(),
//!         },
//!     )
//!     .await?;
//!
//! for record in &result.data {
//!     println!("{:?}", record.get("title"));
//! }
//! println!("total: {}", result.total);
//! ```
//!
//! The built request is `GET {base}/posts?page[number]=1&page[size]=25&sort=-published_at`
//! and each resource object in the response maps to a flat record with its
//! `id` promoted out of `attributes`.
//!
//! ## Writing Records
//!
//! ```rust,ignore
//! use jsonapi_provider::{CreateParams, DeleteParams, UpdateParams};
//! use serde_json::json;
//!
//! let mut data = serde_json::Map::new();
//! data.insert("title".to_string(), json!("Dune"));
//!
//! // POST {base}/posts with {"data": {"type": "posts", "attributes": {...}}}
//! let created = provider.create("posts", CreateParams { data }).await?;
//!
//! // PATCH {base}/posts/1 (or PUT, per ProviderConfig::update_method)
//! let mut changes = serde_json::Map::new();
//! changes.insert("title".to_string(), json!("Dune Messiah"));
//! let updated = provider
//!     .update("posts", UpdateParams { id: json!(1), data: changes })
//!     .await?;
//!
//! // DELETE {base}/posts/1; the result echoes the requested id
//! let deleted = provider.delete("posts", DeleteParams { id: json!(1) }).await?;
//! ```
//!
//! ## Dynamic Dispatch
//!
//! Callers that receive the request kind as a string can use
//! [`DataProvider::dispatch`]; an unknown kind fails before any request is
//! sent:
//!
//! ```rust,ignore
//! use jsonapi_provider::{GetOneParams, RequestParams};
//!
//! let response = provider
//!     .dispatch(
//!         "GET_ONE",
//!         "posts",
//!         RequestParams::GetOne(GetOneParams { id: serde_json::json!(1) }),
//!     )
//!     .await?;
//! ```
//!
//! ## Column Preferences
//!
//! A datagrid can persist which columns are visible per resource; list
//! queries then carry a `fields[T]` parameter selecting only those
//! attributes:
//!
//! ```rust,ignore
//! use jsonapi_provider::{ColumnDescriptor, DataProvider, InMemoryColumnPreferences};
//!
//! let mut store = InMemoryColumnPreferences::new();
//! store.set_available_columns(
//!     "posts",
//!     vec![
//!         ColumnDescriptor { index: 1, source: "title".to_string() },
//!         ColumnDescriptor { index: 2, source: "body".to_string() },
//!     ],
//! );
//! store.set_omit("posts", vec!["body".to_string()]);
//!
//! let provider = DataProvider::with_columns(config, store);
//! // list queries on "posts" now carry fields[posts]=title
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and preference stores are
//!   instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and request kinds validate on
//!   construction, before any network activity
//! - **Thread-safe**: All shared types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Single-attempt transport**: One HTTP call per invocation; failures
//!   propagate unmodified with no retry or recovery

pub mod clients;
pub mod config;
pub mod error;
pub mod provider;

// Re-export public types at crate root for convenience
pub use config::{ArrayFormat, BaseUrl, ProviderConfig, ProviderConfigBuilder, UpdateMethod};
pub use error::ConfigError;
pub use provider::{
    ColumnDescriptor, ColumnPreferences, CreateParams, DataProvider, DeleteManyParams,
    DeleteParams, GetListParams, GetManyParams, GetManyReferenceParams, GetOneParams,
    InMemoryColumnPreferences, ListResult, NoColumnPreferences, Pagination, ProviderError,
    ProviderResponse, Record, RequestKind, RequestParams, Sort, SortOrder, UpdateManyParams,
    UpdateParams,
};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

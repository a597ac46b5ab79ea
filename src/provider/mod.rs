//! The data provider: CRUD verb to JSON:API request translation.
//!
//! This module is the core of the crate. [`DataProvider`] exposes one
//! typed method per request kind (`get_list`, `get_one`, `create`,
//! `update`, `update_many`, `delete`, `delete_many`, `get_many`,
//! `get_many_reference`), each performing exactly one HTTP round trip:
//! outbound, the parameters become a URL, method, headers and JSON:API
//! body; inbound, the response document becomes flat
//! `{id, ...attributes}` records plus a total where applicable.
//!
//! A dynamic [`DataProvider::dispatch`] entry point accepts the request
//! kind as a string and rejects unknown kinds before any request is
//! built or sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use jsonapi_provider::{
//!     BaseUrl, DataProvider, GetListParams, Pagination, ProviderConfig, Sort,
//! };
//!
//! let config = ProviderConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let provider = DataProvider::new(config);
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
//! println!("{} of {} posts", result.data.len(), result.total);
//! ```

mod columns;
mod document;
mod errors;
mod normalize;
mod params;
mod query;

pub use columns::{ColumnDescriptor, ColumnPreferences, InMemoryColumnPreferences, NoColumnPreferences};
pub use document::{Document, DocumentPayload, PrimaryData, ResourceObject, ResourcePayload};
pub use errors::ProviderError;
pub use normalize::{ListResult, Record};
pub use params::{
    CreateParams, DeleteManyParams, DeleteParams, GetListParams, GetManyParams,
    GetManyReferenceParams, GetOneParams, Pagination, RequestKind, RequestParams, Sort, SortOrder,
    UpdateManyParams, UpdateParams,
};
pub use query::to_query_string;

use std::sync::Arc;

use serde::de::Error as _;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{ProviderConfig, UpdateMethod};
use crate::provider::columns::resolve_selected_sources;
use crate::provider::document::{Document as ResponseDocument, DocumentPayload as WritePayload};
use crate::provider::normalize::{flatten, resolve_total};
use crate::provider::query::{
    append_fields, append_filter, append_filters, append_pagination, append_sort, scalar_to_string,
};

/// The normalized result of a dynamic [`DataProvider::dispatch`] call.
///
/// `data` is a record object for single-record kinds, an array of record
/// objects for list kinds and an array of ids for the batched write
/// kinds; `total` is only present for list kinds.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderResponse {
    /// The normalized payload.
    pub data: Value,
    /// Total item count, for list kinds.
    pub total: Option<u64>,
}

/// A data provider for a JSON:API backend.
///
/// Construct one per backend with [`DataProvider::new`], or
/// [`DataProvider::with_columns`] to attach persisted column preferences
/// for sparse-fieldset list queries. The provider holds no mutable state:
/// concurrent calls are independent and safe by construction.
///
/// # Thread Safety
///
/// `DataProvider` is `Send + Sync`, making it safe to share across async
/// tasks.
pub struct DataProvider {
    http_client: HttpClient,
    config: ProviderConfig,
    columns: Arc<dyn ColumnPreferences>,
}

// Verify DataProvider is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DataProvider>();
};

impl std::fmt::Debug for DataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DataProvider {
    /// Creates a provider with no persisted column preferences.
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_columns(config, NoColumnPreferences)
    }

    /// Creates a provider with the given column-preference store.
    ///
    /// The store is consulted on `get_list` calls to add a `fields[T]`
    /// parameter selecting only the visible columns.
    #[must_use]
    pub fn with_columns(
        config: ProviderConfig,
        columns: impl ColumnPreferences + 'static,
    ) -> Self {
        let http_client = HttpClient::new(&config);
        Self {
            http_client,
            config,
            columns: Arc::new(columns),
        }
    }

    /// Returns the provider configuration.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetches a paginated, sorted, filtered collection.
    ///
    /// Builds `GET {base}/{resource}?{query}` with `page[number]` and
    /// `page[size]` from the pagination, one `filter[K]` group per filter
    /// key, a `fields[T]` parameter when column preferences resolve for
    /// the resource, and `sort` (prefixed `-` when descending).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures and
    /// [`ProviderError::Decode`] when the response is not a JSON:API
    /// list document.
    pub async fn get_list(
        &self,
        resource: &str,
        params: GetListParams,
    ) -> Result<ListResult, ProviderError> {
        let pairs = self.list_query(resource, &params);
        let request = HttpRequest::builder(HttpMethod::Get, resource)
            .query(pairs)
            .build()
            .map_err(HttpError::from)?;

        let document = self.fetch_document(request).await?;
        self.normalize_list(document)
    }

    /// Fetches a single record by id via `GET {base}/{resource}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures and
    /// [`ProviderError::Decode`] when the response is not a single
    /// JSON:API resource object.
    pub async fn get_one(
        &self,
        resource: &str,
        params: GetOneParams,
    ) -> Result<Record, ProviderError> {
        let request = HttpRequest::builder(HttpMethod::Get, record_path(resource, &params.id))
            .build()
            .map_err(HttpError::from)?;

        let document = self.fetch_document(request).await?;
        Ok(flatten(Self::expect_one(document)?))
    }

    /// Creates a record via `POST {base}/{resource}` with the body
    /// `{"data": {"type": resource, "attributes": data}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures and
    /// [`ProviderError::Decode`] when the response is not a single
    /// JSON:API resource object.
    pub async fn create(
        &self,
        resource: &str,
        params: CreateParams,
    ) -> Result<Record, ProviderError> {
        let payload = WritePayload {
            data: ResourcePayload {
                id: None,
                resource_type: resource.to_string(),
                attributes: params.data,
            },
        };
        let request = HttpRequest::builder(HttpMethod::Post, resource)
            .body(serde_json::to_value(&payload)?)
            .build()
            .map_err(HttpError::from)?;

        let document = self.fetch_document(request).await?;
        Ok(flatten(Self::expect_one(document)?))
    }

    /// Updates a record via the configured update method on
    /// `{base}/{resource}/{id}`.
    ///
    /// The body is `{"data": {"id": id, "type": resource, "attributes":
    /// data}}` with any `id` key stripped from the attributes before
    /// serialization.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures and
    /// [`ProviderError::Decode`] when the response is not a single
    /// JSON:API resource object.
    pub async fn update(
        &self,
        resource: &str,
        params: UpdateParams,
    ) -> Result<Record, ProviderError> {
        let path = record_path(resource, &params.id);
        let payload = Self::update_payload(resource, params);
        let request = HttpRequest::builder(self.update_http_method(), path)
            .body(serde_json::to_value(&payload)?)
            .build()
            .map_err(HttpError::from)?;

        let document = self.fetch_document(request).await?;
        Ok(flatten(Self::expect_one(document)?))
    }

    /// Updates several records via the configured update method on the
    /// collection URL, body `{"ids": [...], "data": {...}}`.
    ///
    /// The response body is ignored; the request ids are echoed back.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures.
    pub async fn update_many(
        &self,
        resource: &str,
        params: UpdateManyParams,
    ) -> Result<Vec<Value>, ProviderError> {
        let body = serde_json::json!({
            "ids": params.ids,
            "data": params.data,
        });
        let request = HttpRequest::builder(self.update_http_method(), resource)
            .body(body)
            .build()
            .map_err(HttpError::from)?;

        self.http_client.request(request).await?;
        Ok(params.ids)
    }

    /// Deletes a record via `DELETE {base}/{resource}/{id}`.
    ///
    /// Whatever the server returned, the result is `{"id": <requested
    /// id>}`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures.
    pub async fn delete(
        &self,
        resource: &str,
        params: DeleteParams,
    ) -> Result<Record, ProviderError> {
        let request = HttpRequest::builder(HttpMethod::Delete, record_path(resource, &params.id))
            .build()
            .map_err(HttpError::from)?;

        self.http_client.request(request).await?;

        let mut record = Record::new();
        record.insert("id".to_string(), params.id);
        Ok(record)
    }

    /// Deletes several records via `DELETE {base}/{resource}` with the
    /// body `{"ids": [...]}`.
    ///
    /// The response body is ignored; the request ids are echoed back.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures.
    pub async fn delete_many(
        &self,
        resource: &str,
        params: DeleteManyParams,
    ) -> Result<Vec<Value>, ProviderError> {
        let body = serde_json::json!({ "ids": params.ids });
        let request = HttpRequest::builder(HttpMethod::Delete, resource)
            .body(body)
            .build()
            .map_err(HttpError::from)?;

        self.http_client.request(request).await?;
        Ok(params.ids)
    }

    /// Fetches a batch of records by id list.
    ///
    /// Builds a single `filter[{get_many_key}]` group with the ids
    /// expanded per the configured array format.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures and
    /// [`ProviderError::Decode`] when the response is not a JSON:API
    /// list document.
    pub async fn get_many(
        &self,
        resource: &str,
        params: GetManyParams,
    ) -> Result<ListResult, ProviderError> {
        let pairs = self.get_many_query(&params);
        let request = HttpRequest::builder(HttpMethod::Get, resource)
            .query(pairs)
            .build()
            .map_err(HttpError::from)?;

        let document = self.fetch_document(request).await?;
        self.normalize_list(document)
    }

    /// Fetches the records referencing a given record: the list query
    /// plus `filter[{target}]` = the reference id.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] for transport failures and
    /// [`ProviderError::Decode`] when the response is not a JSON:API
    /// list document.
    pub async fn get_many_reference(
        &self,
        resource: &str,
        params: GetManyReferenceParams,
    ) -> Result<ListResult, ProviderError> {
        let pairs = self.reference_query(&params);
        let request = HttpRequest::builder(HttpMethod::Get, resource)
            .query(pairs)
            .build()
            .map_err(HttpError::from)?;

        let document = self.fetch_document(request).await?;
        self.normalize_list(document)
    }

    /// Dynamic entry point: translates a request named by its kind string.
    ///
    /// An unknown kind string fails with
    /// [`ProviderError::UnsupportedRequestType`] before any request is
    /// built or sent; parameters belonging to a different kind fail with
    /// [`ProviderError::ParamsMismatch`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as the typed method for the kind, plus the
    /// two pre-flight errors above.
    pub async fn dispatch(
        &self,
        kind: &str,
        resource: &str,
        params: RequestParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let kind: RequestKind = kind.parse()?;
        if kind != params.kind() {
            return Err(ProviderError::ParamsMismatch { kind });
        }

        tracing::debug!(%kind, resource, "dispatching request");

        match params {
            RequestParams::GetList(p) => Ok(list_response(self.get_list(resource, p).await?)),
            RequestParams::GetOne(p) => Ok(record_response(self.get_one(resource, p).await?)),
            RequestParams::Create(p) => Ok(record_response(self.create(resource, p).await?)),
            RequestParams::Update(p) => Ok(record_response(self.update(resource, p).await?)),
            RequestParams::UpdateMany(p) => {
                Ok(ids_response(self.update_many(resource, p).await?))
            }
            RequestParams::Delete(p) => Ok(record_response(self.delete(resource, p).await?)),
            RequestParams::DeleteMany(p) => {
                Ok(ids_response(self.delete_many(resource, p).await?))
            }
            RequestParams::GetMany(p) => Ok(list_response(self.get_many(resource, p).await?)),
            RequestParams::GetManyReference(p) => {
                Ok(list_response(self.get_many_reference(resource, p).await?))
            }
        }
    }

    /// Builds the query pairs for a list request.
    fn list_query(&self, resource: &str, params: &GetListParams) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(pagination) = &params.pagination {
            append_pagination(&mut pairs, pagination);
        }
        append_filters(&mut pairs, &params.filter, self.config.array_format());
        if let Some(sources) = resolve_selected_sources(self.columns.as_ref(), resource) {
            append_fields(&mut pairs, resource, &sources);
        }
        append_sort(&mut pairs, params.sort.as_ref());
        pairs
    }

    /// Builds the query pairs for a batched-id request.
    fn get_many_query(&self, params: &GetManyParams) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        append_filter(
            &mut pairs,
            self.config.get_many_key(),
            &Value::Array(params.ids.clone()),
            self.config.array_format(),
        );
        pairs
    }

    /// Builds the query pairs for a reference request.
    fn reference_query(&self, params: &GetManyReferenceParams) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(pagination) = &params.pagination {
            append_pagination(&mut pairs, pagination);
        }
        append_filters(&mut pairs, &params.filter, self.config.array_format());
        append_filter(
            &mut pairs,
            &params.target,
            &params.id,
            self.config.array_format(),
        );
        append_sort(&mut pairs, params.sort.as_ref());
        pairs
    }

    /// Builds the write payload for an update, stripping any `id` key
    /// from the attributes.
    fn update_payload(resource: &str, params: UpdateParams) -> WritePayload {
        let mut attributes = params.data;
        attributes.remove("id");
        WritePayload {
            data: ResourcePayload {
                id: Some(params.id),
                resource_type: resource.to_string(),
                attributes,
            },
        }
    }

    /// Returns the HTTP method for update requests per the configuration.
    const fn update_http_method(&self) -> HttpMethod {
        match self.config.update_method() {
            UpdateMethod::Patch => HttpMethod::Patch,
            UpdateMethod::Put => HttpMethod::Put,
        }
    }

    /// Sends the request and decodes the response body as a JSON:API
    /// document.
    async fn fetch_document(&self, request: HttpRequest) -> Result<ResponseDocument, ProviderError> {
        let response = self.http_client.request(request).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Normalizes a list document into records plus a total.
    fn normalize_list(&self, document: ResponseDocument) -> Result<ListResult, ProviderError> {
        let ResponseDocument { data, meta } = document;
        let resources = match data {
            PrimaryData::Many(resources) => resources,
            PrimaryData::One(_) => {
                return Err(ProviderError::Decode(serde_json::Error::custom(
                    "expected a list of resource objects in `data`",
                )))
            }
        };

        let item_count = resources.len();
        let total = resolve_total(meta.as_ref(), self.config.total_field(), item_count);
        let data = resources.into_iter().map(flatten).collect();
        Ok(ListResult { data, total })
    }

    /// Extracts the single resource object from a document.
    fn expect_one(document: ResponseDocument) -> Result<ResourceObject, ProviderError> {
        match document.data {
            PrimaryData::One(resource) => Ok(resource),
            PrimaryData::Many(_) => Err(ProviderError::Decode(serde_json::Error::custom(
                "expected a single resource object in `data`",
            ))),
        }
    }
}

/// Builds the path for a single-record operation, percent-encoding the id.
fn record_path(resource: &str, id: &Value) -> String {
    let id = scalar_to_string(id);
    format!("{resource}/{}", urlencoding::encode(&id))
}

fn list_response(result: ListResult) -> ProviderResponse {
    ProviderResponse {
        data: Value::Array(result.data.into_iter().map(Value::Object).collect()),
        total: Some(result.total),
    }
}

fn record_response(record: Record) -> ProviderResponse {
    ProviderResponse {
        data: Value::Object(record),
        total: None,
    }
}

fn ids_response(ids: Vec<Value>) -> ProviderResponse {
    ProviderResponse {
        data: Value::Array(ids),
        total: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArrayFormat, BaseUrl};
    use serde_json::json;

    fn create_test_provider() -> DataProvider {
        let config = ProviderConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap();
        DataProvider::new(config)
    }

    fn provider_with(config: ProviderConfig) -> DataProvider {
        DataProvider::new(config)
    }

    #[test]
    fn test_list_query_contains_pagination_pairs() {
        let provider = create_test_provider();
        let params = GetListParams {
            pagination: Some(Pagination::new(2, 50)),
            sort: None,
            filter: serde_json::Map::new(),
        };

        let pairs = provider.list_query("posts", &params);
        assert!(pairs.contains(&("page[number]".to_string(), "2".to_string())));
        assert!(pairs.contains(&("page[size]".to_string(), "50".to_string())));
    }

    #[test]
    fn test_list_query_sort_rendering() {
        let provider = create_test_provider();

        let descending = GetListParams {
            pagination: None,
            sort: Some(Sort::desc("name")),
            filter: serde_json::Map::new(),
        };
        assert!(provider
            .list_query("posts", &descending)
            .contains(&("sort".to_string(), "-name".to_string())));

        let ascending = GetListParams {
            pagination: None,
            sort: Some(Sort::asc("name")),
            filter: serde_json::Map::new(),
        };
        assert!(provider
            .list_query("posts", &ascending)
            .contains(&("sort".to_string(), "name".to_string())));

        let unsorted = GetListParams::default();
        assert!(provider
            .list_query("posts", &unsorted)
            .iter()
            .all(|(key, _)| key != "sort"));
    }

    #[test]
    fn test_list_query_without_preferences_has_no_fields_pair() {
        let provider = create_test_provider();
        let pairs = provider.list_query("posts", &GetListParams::default());
        assert!(pairs.iter().all(|(key, _)| !key.starts_with("fields[")));
    }

    #[test]
    fn test_list_query_with_omit_preferences_selects_fields() {
        let config = ProviderConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap();
        let mut store = InMemoryColumnPreferences::new();
        store.set_available_columns(
            "posts",
            vec![
                ColumnDescriptor {
                    index: 1,
                    source: "title".to_string(),
                },
                ColumnDescriptor {
                    index: 2,
                    source: "body".to_string(),
                },
            ],
        );
        store.set_omit("posts", vec!["body".to_string()]);
        let provider = DataProvider::with_columns(config, store);

        let pairs = provider.list_query("posts", &GetListParams::default());
        assert!(pairs.contains(&("fields[posts]".to_string(), "title".to_string())));
    }

    #[test]
    fn test_fields_pair_uses_last_segment_of_qualified_resource() {
        let config = ProviderConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap();
        let mut store = InMemoryColumnPreferences::new();
        store.set_available_columns(
            "admin/posts",
            vec![ColumnDescriptor {
                index: 1,
                source: "title".to_string(),
            }],
        );
        let provider = DataProvider::with_columns(config, store);

        let pairs = provider.list_query("admin/posts", &GetListParams::default());
        assert!(pairs.contains(&("fields[posts]".to_string(), "title".to_string())));
    }

    #[test]
    fn test_get_many_query_uses_default_key_and_repeat_format() {
        let provider = create_test_provider();
        let params = GetManyParams {
            ids: vec![json!(1), json!(2), json!(3)],
        };

        let pairs = provider.get_many_query(&params);
        assert_eq!(
            pairs,
            vec![
                ("filter[id]".to_string(), "1".to_string()),
                ("filter[id]".to_string(), "2".to_string()),
                ("filter[id]".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_get_many_query_honors_configured_key_and_format() {
        let config = ProviderConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .get_many_key("ids")
            .array_format(ArrayFormat::Comma)
            .build()
            .unwrap();
        let provider = provider_with(config);
        let params = GetManyParams {
            ids: vec![json!(1), json!(2)],
        };

        let pairs = provider.get_many_query(&params);
        assert_eq!(pairs, vec![("filter[ids]".to_string(), "1,2".to_string())]);
    }

    #[test]
    fn test_reference_query_adds_target_filter() {
        let provider = create_test_provider();
        let params = GetManyReferenceParams {
            target: "post_id".to_string(),
            id: json!(7),
            pagination: Some(Pagination::new(1, 10)),
            sort: None,
            filter: serde_json::Map::new(),
        };

        let pairs = provider.reference_query(&params);
        assert!(pairs.contains(&("filter[post_id]".to_string(), "7".to_string())));
        assert!(pairs.contains(&("page[number]".to_string(), "1".to_string())));
    }

    #[test]
    fn test_update_payload_strips_id_from_attributes() {
        let mut data = serde_json::Map::new();
        data.insert("id".to_string(), json!("999"));
        data.insert("title".to_string(), json!("Dune"));

        let payload = DataProvider::update_payload(
            "posts",
            UpdateParams {
                id: json!("42"),
                data,
            },
        );

        assert_eq!(payload.data.id, Some(json!("42")));
        assert!(payload.data.attributes.get("id").is_none());
        assert_eq!(payload.data.attributes.get("title"), Some(&json!("Dune")));
    }

    #[test]
    fn test_record_path_encodes_id() {
        assert_eq!(record_path("posts", &json!(42)), "posts/42");
        assert_eq!(record_path("posts", &json!("a/b c")), "posts/a%2Fb%20c");
    }

    #[test]
    fn test_normalize_list_resolves_total_from_meta() {
        let config = ProviderConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .total_field("count")
            .build()
            .unwrap();
        let provider = provider_with(config);

        let document: ResponseDocument = serde_json::from_value(json!({
            "data": [
                {"id": "1", "type": "posts", "attributes": {"title": "a"}},
                {"id": "2", "type": "posts", "attributes": {"title": "b"}},
                {"id": "3", "type": "posts", "attributes": {"title": "c"}}
            ],
            "meta": {"count": 42}
        }))
        .unwrap();

        let result = provider.normalize_list(document).unwrap();
        assert_eq!(result.total, 42);
        assert_eq!(result.data.len(), 3);
    }

    #[test]
    fn test_normalize_list_falls_back_to_item_count() {
        let provider = create_test_provider();

        let document: ResponseDocument = serde_json::from_value(json!({
            "data": [
                {"id": "1", "type": "posts", "attributes": {}},
                {"id": "2", "type": "posts", "attributes": {}}
            ],
            "meta": {"count": 42}
        }))
        .unwrap();

        // total_field is unset, so the meta count is ignored
        let result = provider.normalize_list(document).unwrap();
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_normalize_list_rejects_single_object_data() {
        let provider = create_test_provider();
        let document: ResponseDocument = serde_json::from_value(json!({
            "data": {"id": "1", "type": "posts", "attributes": {}}
        }))
        .unwrap();

        assert!(matches!(
            provider.normalize_list(document),
            Err(ProviderError::Decode(_))
        ));
    }

    #[test]
    fn test_expect_one_rejects_list_data() {
        let document: ResponseDocument = serde_json::from_value(json!({
            "data": [{"id": "1", "type": "posts", "attributes": {}}]
        }))
        .unwrap();

        assert!(matches!(
            DataProvider::expect_one(document),
            Err(ProviderError::Decode(_))
        ));
    }

    #[test]
    fn test_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DataProvider>();
    }
}

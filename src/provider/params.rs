//! Request kinds and per-kind parameter types.
//!
//! This module defines the closed enumeration of abstract CRUD request
//! kinds the provider translates, and the parameter structure each kind
//! carries. Record data and filters are dynamic JSON maps; ids are JSON
//! values so both string and numeric ids pass through unchanged.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::provider::errors::ProviderError;

/// The abstract CRUD/query operation being translated.
///
/// Parsed from the canonical uppercase wire names (`GET_LIST`, `GET_ONE`,
/// `CREATE`, `UPDATE`, `UPDATE_MANY`, `DELETE`, `DELETE_MANY`, `GET_MANY`,
/// `GET_MANY_REFERENCE`). Any other string fails with
/// [`ProviderError::UnsupportedRequestType`] before a request is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Fetch a paginated, sorted, filtered collection.
    GetList,
    /// Fetch a single record by id.
    GetOne,
    /// Create a new record.
    Create,
    /// Update a single record by id.
    Update,
    /// Update several records in one call.
    UpdateMany,
    /// Delete a single record by id.
    Delete,
    /// Delete several records in one call.
    DeleteMany,
    /// Fetch a batch of records by id list.
    GetMany,
    /// Fetch the records referencing a given record.
    GetManyReference,
}

impl RequestKind {
    /// Returns the canonical wire name for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetList => "GET_LIST",
            Self::GetOne => "GET_ONE",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::UpdateMany => "UPDATE_MANY",
            Self::Delete => "DELETE",
            Self::DeleteMany => "DELETE_MANY",
            Self::GetMany => "GET_MANY",
            Self::GetManyReference => "GET_MANY_REFERENCE",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET_LIST" => Ok(Self::GetList),
            "GET_ONE" => Ok(Self::GetOne),
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "UPDATE_MANY" => Ok(Self::UpdateMany),
            "DELETE" => Ok(Self::Delete),
            "DELETE_MANY" => Ok(Self::DeleteMany),
            "GET_MANY" => Ok(Self::GetMany),
            "GET_MANY_REFERENCE" => Ok(Self::GetManyReference),
            _ => Err(ProviderError::UnsupportedRequestType {
                kind: s.to_string(),
            }),
        }
    }
}

/// Sort direction for list requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// A sort specification: field name plus direction.
///
/// Rendered as the JSON:API `sort` query parameter, with a `-` prefix
/// when descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    /// The attribute to sort by.
    pub field: String,
    /// The sort direction.
    pub order: SortOrder,
}

impl Sort {
    /// Creates an ascending sort on the given field.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    /// Creates a descending sort on the given field.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Page-based pagination for list requests.
///
/// Rendered as the JSON:API `page[number]` and `page[size]` query
/// parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    /// Number of records per page.
    pub per_page: u64,
}

impl Pagination {
    /// Creates a new pagination specification.
    #[must_use]
    pub const fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }
}

/// Parameters for a [`RequestKind::GetList`] request.
#[derive(Clone, Debug, Default)]
pub struct GetListParams {
    /// Pagination; `None` omits the page parameters entirely.
    pub pagination: Option<Pagination>,
    /// Sort; `None` omits the `sort` parameter.
    pub sort: Option<Sort>,
    /// Filter values, one `filter[K]` group per key.
    pub filter: Map<String, Value>,
}

/// Parameters for a [`RequestKind::GetOne`] request.
#[derive(Clone, Debug)]
pub struct GetOneParams {
    /// The id of the record to fetch.
    pub id: Value,
}

/// Parameters for a [`RequestKind::Create`] request.
#[derive(Clone, Debug, Default)]
pub struct CreateParams {
    /// The attributes of the record to create.
    pub data: Map<String, Value>,
}

/// Parameters for a [`RequestKind::Update`] request.
#[derive(Clone, Debug)]
pub struct UpdateParams {
    /// The id of the record to update.
    pub id: Value,
    /// The new attribute values. Any `id` key is stripped before
    /// serialization.
    pub data: Map<String, Value>,
}

/// Parameters for a [`RequestKind::UpdateMany`] request.
#[derive(Clone, Debug, Default)]
pub struct UpdateManyParams {
    /// The ids of the records to update.
    pub ids: Vec<Value>,
    /// The new attribute values applied to every record.
    pub data: Map<String, Value>,
}

/// Parameters for a [`RequestKind::Delete`] request.
#[derive(Clone, Debug)]
pub struct DeleteParams {
    /// The id of the record to delete.
    pub id: Value,
}

/// Parameters for a [`RequestKind::DeleteMany`] request.
#[derive(Clone, Debug, Default)]
pub struct DeleteManyParams {
    /// The ids of the records to delete.
    pub ids: Vec<Value>,
}

/// Parameters for a [`RequestKind::GetMany`] request.
#[derive(Clone, Debug, Default)]
pub struct GetManyParams {
    /// The ids of the records to fetch.
    pub ids: Vec<Value>,
}

/// Parameters for a [`RequestKind::GetManyReference`] request.
#[derive(Clone, Debug)]
pub struct GetManyReferenceParams {
    /// The foreign-key field on the target collection.
    pub target: String,
    /// The id of the referenced record.
    pub id: Value,
    /// Pagination; `None` omits the page parameters entirely.
    pub pagination: Option<Pagination>,
    /// Sort; `None` omits the `sort` parameter.
    pub sort: Option<Sort>,
    /// Additional filter values.
    pub filter: Map<String, Value>,
}

/// Kind-tagged parameters for the dynamic [`dispatch`] entry point.
///
/// [`dispatch`]: crate::DataProvider::dispatch
#[derive(Clone, Debug)]
pub enum RequestParams {
    /// Parameters for `GET_LIST`.
    GetList(GetListParams),
    /// Parameters for `GET_ONE`.
    GetOne(GetOneParams),
    /// Parameters for `CREATE`.
    Create(CreateParams),
    /// Parameters for `UPDATE`.
    Update(UpdateParams),
    /// Parameters for `UPDATE_MANY`.
    UpdateMany(UpdateManyParams),
    /// Parameters for `DELETE`.
    Delete(DeleteParams),
    /// Parameters for `DELETE_MANY`.
    DeleteMany(DeleteManyParams),
    /// Parameters for `GET_MANY`.
    GetMany(GetManyParams),
    /// Parameters for `GET_MANY_REFERENCE`.
    GetManyReference(GetManyReferenceParams),
}

impl RequestParams {
    /// Returns the request kind these parameters belong to.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::GetList(_) => RequestKind::GetList,
            Self::GetOne(_) => RequestKind::GetOne,
            Self::Create(_) => RequestKind::Create,
            Self::Update(_) => RequestKind::Update,
            Self::UpdateMany(_) => RequestKind::UpdateMany,
            Self::Delete(_) => RequestKind::Delete,
            Self::DeleteMany(_) => RequestKind::DeleteMany,
            Self::GetMany(_) => RequestKind::GetMany,
            Self::GetManyReference(_) => RequestKind::GetManyReference,
        }
    }
}

//! Inbound response normalization.
//!
//! Maps JSON:API resource objects back into the flat `{id, ...attributes}`
//! records callers expect, and resolves list totals from the response meta
//! object with a fallback to the returned item count.

use serde_json::{Map, Value};

use crate::provider::document::ResourceObject;

/// A normalized record: the flat `{id, ...attributes}` shape.
pub type Record = Map<String, Value>;

/// A normalized list response: the records plus the total item count.
#[derive(Clone, Debug, PartialEq)]
pub struct ListResult {
    /// The normalized records.
    pub data: Vec<Record>,
    /// Total number of items in the collection, for pagination.
    pub total: u64,
}

/// Flattens a resource object into a normalized record.
///
/// The id is inserted first and the attributes after it, so an attribute
/// literally named `id` overwrites the resource id. Long-standing callers
/// rely on that precedence, so it is part of the contract.
pub(crate) fn flatten(resource: ResourceObject) -> Record {
    let mut record = Record::new();
    record.insert("id".to_string(), resource.id);
    for (key, value) in resource.attributes {
        record.insert(key, value);
    }
    record
}

/// Looks up a possibly dotted path in a meta object.
///
/// `"page.total"` addresses `meta.page.total`; each intermediate segment
/// must be an object.
fn lookup_dotted<'a>(meta: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = meta.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Resolves the total item count for a list response.
///
/// When a meta field name is configured and the response meta carries it
/// as a number, that value wins — including a literal `0`. Otherwise the
/// count of returned records is used.
pub(crate) fn resolve_total(
    meta: Option<&Map<String, Value>>,
    total_field: Option<&str>,
    item_count: usize,
) -> u64 {
    let from_meta = match (meta, total_field) {
        (Some(meta), Some(field)) => lookup_dotted(meta, field).and_then(Value::as_u64),
        _ => None,
    };
    from_meta.unwrap_or(item_count as u64)
}

//! Outbound query building.
//!
//! Pure functions that turn request parameters into ordered query pairs
//! following the JSON:API conventions: `page[number]`/`page[size]` for
//! pagination, `filter[K]` groups for filters, `sort` with a `-` prefix
//! for descending order and `fields[T]` for sparse fieldsets.
//!
//! Pairs are kept ordered and keys may repeat; how an array value expands
//! into pairs is governed by the configured [`ArrayFormat`].

use serde_json::{Map, Value};

use crate::config::ArrayFormat;
use crate::provider::params::{Pagination, Sort, SortOrder};

/// Renders a scalar JSON value the way it appears in a query string:
/// strings bare (no quotes), everything else via its JSON rendering.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Appends the pairs for one array-valued key per the given format.
fn append_array(pairs: &mut Vec<(String, String)>, key: &str, values: &[Value], format: ArrayFormat) {
    match format {
        ArrayFormat::Repeat => {
            for value in values {
                pairs.push((key.to_string(), scalar_to_string(value)));
            }
        }
        ArrayFormat::Brackets => {
            for value in values {
                pairs.push((format!("{key}[]"), scalar_to_string(value)));
            }
        }
        ArrayFormat::Indices => {
            for (i, value) in values.iter().enumerate() {
                pairs.push((format!("{key}[{i}]"), scalar_to_string(value)));
            }
        }
        ArrayFormat::Comma => {
            let joined = values
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push((key.to_string(), joined));
        }
    }
}

/// Appends one `filter[K]` group for a single filter value.
///
/// Array values expand per the configured format; scalars become a single
/// pair.
pub(crate) fn append_filter(
    pairs: &mut Vec<(String, String)>,
    key: &str,
    value: &Value,
    format: ArrayFormat,
) {
    let filter_key = format!("filter[{key}]");
    match value {
        Value::Array(values) => append_array(pairs, &filter_key, values, format),
        scalar => pairs.push((filter_key, scalar_to_string(scalar))),
    }
}

/// Appends one `filter[K]` group per filter key, in map order.
pub(crate) fn append_filters(
    pairs: &mut Vec<(String, String)>,
    filter: &Map<String, Value>,
    format: ArrayFormat,
) {
    for (key, value) in filter {
        append_filter(pairs, key, value, format);
    }
}

/// Appends the `page[number]` and `page[size]` pairs.
pub(crate) fn append_pagination(pairs: &mut Vec<(String, String)>, pagination: &Pagination) {
    pairs.push(("page[number]".to_string(), pagination.page.to_string()));
    pairs.push(("page[size]".to_string(), pagination.per_page.to_string()));
}

/// Appends the `sort` pair, `-`-prefixed when descending. No sort, no pair.
pub(crate) fn append_sort(pairs: &mut Vec<(String, String)>, sort: Option<&Sort>) {
    if let Some(sort) = sort {
        let value = match sort.order {
            SortOrder::Asc => sort.field.clone(),
            SortOrder::Desc => format!("-{}", sort.field),
        };
        pairs.push(("sort".to_string(), value));
    }
}

/// Appends the `fields[T]` pair for a resolved field selection.
///
/// `T` is the last path segment of the resource; an empty selection emits
/// nothing rather than an empty `fields[]` parameter.
pub(crate) fn append_fields(
    pairs: &mut Vec<(String, String)>,
    resource: &str,
    sources: &[String],
) {
    if sources.is_empty() {
        return;
    }
    let fieldset_type = resource_type(resource);
    pairs.push((format!("fields[{fieldset_type}]"), sources.join(",")));
}

/// Returns the JSON:API type of a possibly path-qualified resource name:
/// the last `/`-separated segment.
pub(crate) fn resource_type(resource: &str) -> &str {
    resource.rsplit('/').next().unwrap_or(resource)
}

/// Percent-encodes and joins query pairs into a query string.
///
/// Useful for composing URLs by hand and for asserting on built queries;
/// the HTTP layer passes the pairs to the transport unjoined.
#[must_use]
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

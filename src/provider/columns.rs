//! Column-preference lookups for sparse fieldsets.
//!
//! A datagrid UI can persist which columns the user shows or hides per
//! resource. List requests consult those preferences to add a `fields[T]`
//! parameter so the backend only returns the visible attributes.
//!
//! The store is injected as a read-only, synchronous trait rather than
//! read from ambient storage, which keeps the request mapping pure and
//! independently testable. Entries are keyed by
//! `"{resource}.datagrid.columns"`, `"{resource}.datagrid.omit"` and
//! `"{resource}.datagrid.availableColumns"`, each holding a JSON list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single datagrid column: its position and the attribute it displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Position of the column in the grid.
    pub index: u64,
    /// The attribute name the column displays.
    pub source: String,
}

/// Read-only lookup of persisted column preferences for a resource.
///
/// Each lookup returns `None` when nothing was persisted for the resource;
/// implementations must not invent defaults.
pub trait ColumnPreferences: Send + Sync {
    /// The explicit column list chosen by the user, if any.
    fn columns(&self, resource: &str) -> Option<Vec<ColumnDescriptor>>;

    /// The attribute names the user hid, if any.
    fn omit(&self, resource: &str) -> Option<Vec<String>>;

    /// Every column the grid can display, if persisted.
    fn available_columns(&self, resource: &str) -> Option<Vec<ColumnDescriptor>>;
}

/// A store with no persisted preferences; every lookup returns `None`.
///
/// This is the default store, so list queries carry no `fields[...]`
/// parameter until a caller supplies real preferences.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoColumnPreferences;

impl ColumnPreferences for NoColumnPreferences {
    fn columns(&self, _resource: &str) -> Option<Vec<ColumnDescriptor>> {
        None
    }

    fn omit(&self, _resource: &str) -> Option<Vec<String>> {
        None
    }

    fn available_columns(&self, _resource: &str) -> Option<Vec<ColumnDescriptor>> {
        None
    }
}

/// An in-memory preference store backed by raw JSON entries.
///
/// Mirrors a browser-style keyed storage: values are stored as JSON and
/// parsed on read, with unparseable entries treated as absent.
///
/// # Example
///
/// ```rust
/// use jsonapi_provider::{ColumnDescriptor, ColumnPreferences, InMemoryColumnPreferences};
///
/// let mut store = InMemoryColumnPreferences::new();
/// store.set_available_columns(
///     "posts",
///     vec![
///         ColumnDescriptor { index: 1, source: "title".to_string() },
///         ColumnDescriptor { index: 2, source: "body".to_string() },
///     ],
/// );
/// store.set_omit("posts", vec!["body".to_string()]);
///
/// assert_eq!(store.omit("posts"), Some(vec!["body".to_string()]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryColumnPreferences {
    entries: HashMap<String, String>,
}

impl InMemoryColumnPreferences {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw JSON entry under the given storage key.
    ///
    /// Useful for loading entries exported from a browser store verbatim.
    pub fn insert_raw(&mut self, key: impl Into<String>, json: impl Into<String>) {
        self.entries.insert(key.into(), json.into());
    }

    /// Persists the explicit column list for a resource.
    pub fn set_columns(&mut self, resource: &str, columns: Vec<ColumnDescriptor>) {
        self.insert_serialized(format!("{resource}.datagrid.columns"), &columns);
    }

    /// Persists the omit list for a resource.
    pub fn set_omit(&mut self, resource: &str, omit: Vec<String>) {
        self.insert_serialized(format!("{resource}.datagrid.omit"), &omit);
    }

    /// Persists the available-columns list for a resource.
    pub fn set_available_columns(&mut self, resource: &str, columns: Vec<ColumnDescriptor>) {
        self.insert_serialized(format!("{resource}.datagrid.availableColumns"), &columns);
    }

    fn insert_serialized<T: Serialize>(&mut self, key: String, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            self.entries.insert(key, json);
        }
    }

    fn get_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        serde_json::from_str(raw).ok()
    }
}

impl ColumnPreferences for InMemoryColumnPreferences {
    fn columns(&self, resource: &str) -> Option<Vec<ColumnDescriptor>> {
        self.get_parsed(&format!("{resource}.datagrid.columns"))
    }

    fn omit(&self, resource: &str) -> Option<Vec<String>> {
        self.get_parsed(&format!("{resource}.datagrid.omit"))
    }

    fn available_columns(&self, resource: &str) -> Option<Vec<ColumnDescriptor>> {
        self.get_parsed(&format!("{resource}.datagrid.availableColumns"))
    }
}

/// Resolves the attribute names a list request should select.
///
/// Resolution order:
/// 1. an explicit column list selects the available columns whose index
///    matches, in listed order;
/// 2. otherwise an omit list selects the available columns whose source
///    is not omitted;
/// 3. otherwise every available column is selected.
///
/// Returns `None` when none of the three sets is persisted, which
/// suppresses the `fields[...]` parameter entirely.
pub(crate) fn resolve_selected_sources(
    store: &dyn ColumnPreferences,
    resource: &str,
) -> Option<Vec<String>> {
    let columns = store.columns(resource);
    let omit = store.omit(resource);
    let available = store.available_columns(resource);

    if columns.is_none() && omit.is_none() && available.is_none() {
        return None;
    }

    let available = available.unwrap_or_default();

    if let Some(columns) = columns {
        let selected = columns
            .iter()
            .filter_map(|chosen| available.iter().find(|a| a.index == chosen.index))
            .map(|a| a.source.clone())
            .collect();
        return Some(selected);
    }

    if let Some(omit) = omit {
        let selected = available
            .into_iter()
            .filter(|column| !omit.contains(&column.source))
            .map(|column| column.source)
            .collect();
        return Some(selected);
    }

    Some(available.into_iter().map(|column| column.source).collect())
}

//! The JSON:API wire subset the provider reads and writes.
//!
//! Request bodies are `{"data": {id?, type, attributes}}` for single-record
//! writes, `{"ids": [...], "data": {...}}` for batched updates and
//! `{"ids": [...]}` for batched deletes. Response bodies are
//! `{"data": <object|array>, "meta"?: {...}}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The resource payload inside an outbound `{"data": ...}` envelope.
///
/// `id` is present on updates and absent on creates.
#[derive(Clone, Debug, Serialize)]
pub struct ResourcePayload {
    /// The record id; omitted from the serialized payload when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// The JSON:API resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The record attributes.
    pub attributes: Map<String, Value>,
}

/// The outbound envelope for single-record writes.
#[derive(Clone, Debug, Serialize)]
pub struct DocumentPayload {
    /// The resource payload.
    pub data: ResourcePayload,
}

/// A resource object from a response document.
///
/// The `id` and `type` members are required; a document missing them
/// fails to decode and that failure propagates to the caller.
#[derive(Clone, Debug, Deserialize)]
pub struct ResourceObject {
    /// The record id. Servers send strings; numeric ids are tolerated.
    pub id: Value,
    /// The JSON:API resource type.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The record attributes; defaults to empty when absent.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// The primary data of a response document: one resource object or many.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// A single resource object.
    One(ResourceObject),
    /// A list of resource objects.
    Many(Vec<ResourceObject>),
}

/// A response document: primary data plus optional meta.
#[derive(Clone, Debug, Deserialize)]
pub struct Document {
    /// The primary data.
    pub data: PrimaryData,
    /// The top-level meta object, if present.
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
}

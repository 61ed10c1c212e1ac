//! Domain DTOs for the data-management API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently
//! of the mock server crate; integration tests catch schema drift between the
//! two. Everything is owned (`String`, `Vec`) and serde-derived.
//!
//! Property values stay loosely typed on purpose: `PropertyValue::values`
//! holds raw `serde_json::Value` payloads because their interpretation is
//! decided per value-type tag by the rendering layer, not by the transport.

use serde::{Deserialize, Serialize};

/// Enumeration of the value types a property can carry.
///
/// The numeric codes are the wire representation. Codes the enum does not
/// know stay representable as the raw `u16` in [`PropertyValue::value_type`],
/// so a renderer can still show them instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
    Date,
    Period,
    RichText,
    ResourcePointer,
    HierarchicalList,
    Time,
    Interval,
    Geometry,
    Color,
    IconClass,
    GeoName,
}

impl ValueType {
    pub fn code(self) -> u16 {
        match self {
            ValueType::Integer => 1,
            ValueType::Float => 2,
            ValueType::Date => 3,
            ValueType::Period => 4,
            ValueType::RichText => 5,
            ValueType::ResourcePointer => 6,
            ValueType::HierarchicalList => 7,
            ValueType::Time => 8,
            ValueType::Interval => 9,
            ValueType::Geometry => 10,
            ValueType::Color => 11,
            ValueType::IconClass => 12,
            ValueType::GeoName => 13,
        }
    }
}

impl TryFrom<u16> for ValueType {
    type Error = u16;

    /// Returns the unrecognized code back as the error.
    fn try_from(code: u16) -> Result<Self, u16> {
        match code {
            1 => Ok(ValueType::Integer),
            2 => Ok(ValueType::Float),
            3 => Ok(ValueType::Date),
            4 => Ok(ValueType::Period),
            5 => Ok(ValueType::RichText),
            6 => Ok(ValueType::ResourcePointer),
            7 => Ok(ValueType::HierarchicalList),
            8 => Ok(ValueType::Time),
            9 => Ok(ValueType::Interval),
            10 => Ok(ValueType::Geometry),
            11 => Ok(ValueType::Color),
            12 => Ok(ValueType::IconClass),
            13 => Ok(ValueType::GeoName),
            other => Err(other),
        }
    }
}

/// One property of a resource together with its current values.
///
/// `ids` runs parallel to `values`: `ids[i]` is the server-side identifier
/// of `values[i]`, used e.g. to key region highlighting for geometry values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyValue {
    /// Property name, e.g. `"arca:comment"` or `"arca:part_of"`.
    pub name: String,
    /// Numeric value-type tag; see [`ValueType`].
    #[serde(rename = "valuetype")]
    pub value_type: u16,
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(default)]
    pub values: Vec<serde_json::Value>,
    /// Semicolon-delimited `key=value` list of rendering parameters, e.g.
    /// `"hlist=(webern)"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
    /// Selects among presentations for the same type tag, e.g. `"pulldown"`
    /// vs. `"radio"` for a hierarchical list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gui_element: Option<String>,
}

/// A resource returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceInfo {
    pub id: String,
    pub restype: String,
    pub label: String,
    #[serde(default)]
    pub properties: Vec<PropertyValue>,
}

/// Request payload for creating a new resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    pub restype: String,
    pub label: String,
}

/// Request payload for attaching a new value to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateValue {
    pub resource_id: String,
    /// Property name the value belongs to.
    pub name: String,
    #[serde(rename = "valuetype")]
    pub value_type: u16,
    pub value: serde_json::Value,
}

/// Request payload for updating an existing value. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A stored value as the server reports it back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueInfo {
    pub id: String,
    pub resource_id: String,
    pub name: String,
    #[serde(rename = "valuetype")]
    pub value_type: u16,
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: String,
    pub user: String,
}

/// One node of a named hierarchical list (controlled vocabulary).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HlistNode {
    pub id: String,
    pub name: String,
    pub label: String,
    /// Nesting depth, root nodes at 0. The list is delivered flat in
    /// pre-order; the depth is enough to rebuild the tree.
    pub level: u32,
}

/// Optional parameters for a search call.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub search_type: Option<String>,
    pub restype: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub label: String,
    pub restype: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub count: u64,
    pub hits: Vec<SearchHit>,
}

/// One geographic-name suggestion from the lookup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeonameEntry {
    pub id: String,
    pub name: String,
}

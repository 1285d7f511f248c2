// Rowgraph - Tabular / Property-Graph Bridge
//
// Copyright (c) 2026 Rowgraph contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The graph value model: every shape a graph query result can take.
//!
//! A single result column may hold a scalar, a list, a property map, a
//! node, a relationship, or a whole path, nested arbitrarily. [`Value`]
//! is the closed sum type the extraction compiler pattern-matches over,
//! so an unsupported combination is a missing match arm rather than a
//! runtime type assertion.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// Property map attached to nodes and relationships.
///
/// `BTreeMap` keeps keys in canonical order, which the path serializer
/// relies on for stable property rendering.
pub type Properties = BTreeMap<String, Value>;

/// A value produced by a graph query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or explicit null.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit floating point value.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Calendar date without a time component.
    Date(NaiveDate),
    /// Instant in time, normalized to UTC.
    DateTime(DateTime<Utc>),
    /// Ordered list of values.
    List(Vec<Value>),
    /// String-keyed map of values.
    Map(Properties),
    /// A graph node.
    Node(Node),
    /// A graph relationship.
    Relationship(Relationship),
    /// An alternating node/relationship chain.
    Path(Path),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of this value's shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "Boolean",
            Self::Int(_) => "Integer",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::List(_) => "list",
            Self::Map(_) => "Map",
            Self::Node(_) => "Node",
            Self::Relationship(_) => "Relationship",
            Self::Path(_) => "Path",
        }
    }

    /// Project this value onto canonical JSON.
    ///
    /// Map keys come out sorted (property maps are `BTreeMap`s) and
    /// temporals render as RFC 3339 text, so the projection is stable
    /// across runs. Structural values (nodes, relationships, paths)
    /// render as their display string.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(n) => serde_json::Value::from(*n),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
            Self::DateTime(dt) => {
                serde_json::Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Self::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Self::Node(_) | Self::Relationship(_) | Self::Path(_) => {
                serde_json::Value::String(crate::render::to_display_string(self))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// A labeled, property-holding graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Internal graph id. Negative means "no node".
    pub id: i64,
    /// Labels in the order the database reports them.
    pub labels: Vec<String>,
    /// Node properties.
    pub properties: Properties,
}

impl Node {
    /// Create a node with the given id and no labels or properties.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            labels: Vec::new(),
            properties: Properties::new(),
        }
    }

    /// The "no node" sentinel used for defaulted or optional-match results.
    pub fn absent() -> Self {
        Self::new(-1)
    }

    /// Returns true if this is the "no node" sentinel.
    pub fn is_absent(&self) -> bool {
        self.id < 0
    }

    /// Add a label, builder style.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Add a property, builder style.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A typed, property-holding directed edge between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Internal graph id. Negative means "no relationship".
    pub id: i64,
    /// Id of the node this relationship starts at.
    pub start_id: i64,
    /// Id of the node this relationship ends at.
    pub end_id: i64,
    /// Relationship type. May be empty.
    pub rel_type: String,
    /// Relationship properties.
    pub properties: Properties,
}

impl Relationship {
    /// Create a relationship between two node ids.
    pub fn new(id: i64, start_id: i64, end_id: i64, rel_type: impl Into<String>) -> Self {
        Self {
            id,
            start_id,
            end_id,
            rel_type: rel_type.into(),
            properties: Properties::new(),
        }
    }

    /// The "no relationship" sentinel.
    pub fn absent() -> Self {
        Self::new(-1, -1, -1, "")
    }

    /// Returns true if this is the "no relationship" sentinel.
    pub fn is_absent(&self) -> bool {
        self.id < 0
    }

    /// Add a property, builder style.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// An alternating chain of nodes and relationships.
///
/// Nodes are not guaranteed to appear in traversal order, and successive
/// relationships may point forward, backward, or be disjoint from the
/// previous one; the path serializer reconstructs a readable chain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    /// The nodes touched by this path, deduplicated by the driver.
    pub nodes: Vec<Node>,
    /// The relationships of this path in traversal order.
    pub relationships: Vec<Relationship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_sentinels() {
        assert!(Node::absent().is_absent());
        assert!(Relationship::absent().is_absent());
        assert!(!Node::new(0).is_absent());
    }

    #[test]
    fn json_projection_sorts_keys_and_renders_temporals() {
        let mut map = Properties::new();
        map.insert("b".into(), Value::Int(2));
        map.insert("a".into(), Value::Date(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()));
        let json = serde_json::to_string(&Value::Map(map).to_json()).unwrap();
        assert_eq!(json, r#"{"a":"2020-01-02","b":2}"#);
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::List(vec![]).kind_name(), "list");
        assert_eq!(Value::Node(Node::absent()).kind_name(), "Node");
    }
}

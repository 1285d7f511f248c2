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

//! Read-path configuration: declared output fields and their extraction
//! paths.
//!
//! A [`Field`] describes one output column: its name, its scalar output
//! type, and the ordered [`PathElement`]s that walk from a raw result
//! record down to the scalar. Element types carry their wire spelling
//! (`"Integer"`, `"List:String"`, `"Node"`, ...) so configurations decode
//! directly from the host's JSON payload.

use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The scalar kinds an output field (or terminal path element) can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Boolean.
    Boolean,
    /// UTF-8 string.
    String,
    /// Calendar date.
    Date,
    /// Date and time of day.
    DateTime,
}

impl ScalarType {
    /// Wire spelling of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Integer" => Ok(Self::Integer),
            "Float" => Ok(Self::Float),
            "Boolean" => Ok(Self::Boolean),
            "String" => Ok(Self::String),
            "Date" => Ok(Self::Date),
            "DateTime" => Ok(Self::DateTime),
            other => Err(format!("invalid scalar type '{other}'")),
        }
    }
}

/// What a list contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A list of scalars.
    Scalar(ScalarType),
    /// A list of nodes (a path's node sequence).
    Node,
    /// A list of relationships (a path's relationship sequence).
    Relationship,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.write_str(s.as_str()),
            Self::Node => f.write_str("Node"),
            Self::Relationship => f.write_str("Relationship"),
        }
    }
}

/// The declared type of one path element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElementType {
    /// A scalar lookup; the recursion's base case.
    Scalar(ScalarType),
    /// A list of the given element kind, spelled `List:<kind>`.
    List(ElementKind),
    /// A node.
    Node,
    /// A relationship.
    Relationship,
    /// An alternating node/relationship chain.
    Path,
    /// A string-keyed property map.
    Map,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.write_str(s.as_str()),
            Self::List(kind) => write!(f, "List:{kind}"),
            Self::Node => f.write_str("Node"),
            Self::Relationship => f.write_str("Relationship"),
            Self::Path => f.write_str("Path"),
            Self::Map => f.write_str("Map"),
        }
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(elem) = s.strip_prefix("List:") {
            let kind = match elem {
                "Node" => ElementKind::Node,
                "Relationship" => ElementKind::Relationship,
                scalar => ElementKind::Scalar(
                    ScalarType::from_str(scalar)
                        .map_err(|_| format!("invalid list element type '{elem}'"))?,
                ),
            };
            return Ok(Self::List(kind));
        }
        match s {
            "Node" => Ok(Self::Node),
            "Relationship" => Ok(Self::Relationship),
            "Path" => Ok(Self::Path),
            "Map" => Ok(Self::Map),
            scalar => ScalarType::from_str(scalar).map(Self::Scalar),
        }
    }
}

impl TryFrom<String> for ElementType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ElementType> for String {
    fn from(value: ElementType) -> Self {
        value.to_string()
    }
}

/// One step of an extraction path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathElement {
    /// The key to look up (a record column, a property name, or a list
    /// operation such as `First` or `Index:3`).
    pub key: String,
    /// The declared type of the value behind the key.
    pub data_type: ElementType,
}

impl PathElement {
    /// Convenience constructor for building paths in code and tests.
    pub fn new(key: impl Into<String>, data_type: ElementType) -> Self {
        Self {
            key: key.into(),
            data_type,
        }
    }
}

/// One declared output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Field {
    /// Output column name. Must be unique within a configuration.
    pub name: String,
    /// Output column type.
    pub data_type: ScalarType,
    /// Ordered path from the raw record to the output scalar.
    pub path: Vec<PathElement>,
}

/// Read-path tool configuration.
///
/// Credential material and connection discovery are resolved by outer
/// collaborators and never reach this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadConfig {
    /// The Cypher query to run against the graph.
    pub query: String,
    /// The declared output fields.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl ReadConfig {
    /// Decode a configuration from its JSON payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Forward-only cursor over a field's path.
///
/// One iterator is created per field per compilation; it never rewinds.
#[derive(Debug)]
pub struct PathIterator<'a> {
    elements: &'a [PathElement],
    index: usize,
}

impl<'a> PathIterator<'a> {
    /// Create an iterator over a field's path elements.
    pub fn new(elements: &'a [PathElement]) -> Self {
        Self { elements, index: 0 }
    }

    /// The next path element, or `None` once the path is exhausted.
    pub fn next_element(&mut self) -> Option<&'a PathElement> {
        let element = self.elements.get(self.index)?;
        self.index += 1;
        Some(element)
    }
}

/// Validate that field names are unique, in declaration order.
pub(crate) fn check_unique_names(fields: &[Field]) -> Result<(), PlanError> {
    let mut seen = std::collections::BTreeSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(PlanError::DuplicateField(field.name.clone()));
        }
    }
    Ok(())
}

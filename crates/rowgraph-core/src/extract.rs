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

//! The extraction compiler: turns a declared path into a reusable
//! closure that pulls one scalar out of one record.
//!
//! Compilation is a recursive descent over the field's [`PathIterator`],
//! dispatching on the declared type of each element. Every structural
//! step (node, relationship, path, list, map) composes the closure built
//! so far with one more lookup, so the per-record work is a plain chain
//! of calls with no re-parsing. Bad path shapes are rejected here, once,
//! as [`PlanError`]s; shape disagreements with the actual data surface
//! per record as [`RowError`]s; plain absence becomes [`Value::Null`].

use crate::config::{ElementKind, ElementType, Field, PathIterator, ScalarType};
use crate::error::{PlanError, RowError};
use crate::record::Record;
use crate::render;
use crate::value::{Node, Path, Properties, Relationship, Value};

/// A compiled extraction: one record in, one scalar (or null) out.
pub type ValueFn = Box<dyn Fn(&Record) -> Result<Value, RowError>>;

type NodeFn = Box<dyn Fn(&Record) -> Result<Node, RowError>>;
type RelationshipFn = Box<dyn Fn(&Record) -> Result<Relationship, RowError>>;
type PathFn = Box<dyn Fn(&Record) -> Result<Path, RowError>>;
type ListFn = Box<dyn Fn(&Record) -> Result<Vec<Value>, RowError>>;
type MapFn = Box<dyn Fn(&Record) -> Result<Properties, RowError>>;
type PickFn = Box<dyn Fn(&Record) -> Result<Option<Value>, RowError>>;

/// Compile one field's path into an extraction closure.
pub fn compile_field(field: &Field) -> Result<ValueFn, PlanError> {
    let mut iterator = PathIterator::new(&field.path);
    generate_value_fn(&mut iterator, field)
}

fn generate_value_fn(iterator: &mut PathIterator, field: &Field) -> Result<ValueFn, PlanError> {
    let Some(element) = iterator.next_element() else {
        return Err(PlanError::EmptyPath(field.name.clone()));
    };
    let key = element.key.clone();
    let field_name = field.name.clone();
    match element.data_type {
        ElementType::Scalar(_) => Ok(Box::new(move |record| {
            Ok(record.get(&key).cloned().unwrap_or(Value::Null))
        })),
        ElementType::List(elem) => {
            let extract: ListFn = Box::new(move |record| match record.get(&key) {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(Value::List(items)) => Ok(items.clone()),
                Some(other) => Err(RowError::TypeMismatch {
                    field: field_name.clone(),
                    key: key.clone(),
                    expected: "list".into(),
                    actual: other.kind_name(),
                }),
            });
            list_fn(iterator, field, elem, extract)
        }
        ElementType::Node => {
            let extract: NodeFn = Box::new(move |record| match record.get(&key) {
                None | Some(Value::Null) => Ok(Node::absent()),
                Some(Value::Node(node)) => Ok(node.clone()),
                Some(other) => Err(RowError::TypeMismatch {
                    field: field_name.clone(),
                    key: key.clone(),
                    expected: "Node".into(),
                    actual: other.kind_name(),
                }),
            });
            node_fn(iterator, field, extract)
        }
        ElementType::Relationship => {
            let extract: RelationshipFn = Box::new(move |record| match record.get(&key) {
                None | Some(Value::Null) => Ok(Relationship::absent()),
                Some(Value::Relationship(rel)) => Ok(rel.clone()),
                Some(other) => Err(RowError::TypeMismatch {
                    field: field_name.clone(),
                    key: key.clone(),
                    expected: "Relationship".into(),
                    actual: other.kind_name(),
                }),
            });
            relationship_fn(iterator, field, extract)
        }
        ElementType::Path => {
            let extract: PathFn = Box::new(move |record| match record.get(&key) {
                None | Some(Value::Null) => Ok(Path::default()),
                Some(Value::Path(path)) => Ok(path.clone()),
                Some(other) => Err(RowError::TypeMismatch {
                    field: field_name.clone(),
                    key: key.clone(),
                    expected: "Path".into(),
                    actual: other.kind_name(),
                }),
            });
            path_fn(iterator, field, extract)
        }
        ElementType::Map => {
            let extract: MapFn = Box::new(move |record| match record.get(&key) {
                None | Some(Value::Null) => Ok(Properties::new()),
                Some(Value::Map(map)) => Ok(map.clone()),
                Some(other) => Err(RowError::TypeMismatch {
                    field: field_name.clone(),
                    key: key.clone(),
                    expected: "Map".into(),
                    actual: other.kind_name(),
                }),
            });
            map_fn(iterator, field, extract)
        }
    }
}

fn node_fn(
    iterator: &mut PathIterator,
    field: &Field,
    extract: NodeFn,
) -> Result<ValueFn, PlanError> {
    let Some(element) = iterator.next_element() else {
        return Err(PlanError::MissingTerminal {
            field: field.name.clone(),
            kind: "a Node".into(),
        });
    };
    match element.key.as_str() {
        "ID" => Ok(Box::new(move |record| {
            let node = extract(record)?;
            if node.is_absent() {
                Ok(Value::Null)
            } else {
                Ok(Value::Int(node.id))
            }
        })),
        "Labels" => {
            let labels: ListFn = Box::new(move |record| {
                let node = extract(record)?;
                Ok(node.labels.into_iter().map(Value::String).collect())
            });
            list_fn(
                iterator,
                field,
                ElementKind::Scalar(ScalarType::String),
                labels,
            )
        }
        "Properties" => {
            let properties: MapFn = Box::new(move |record| Ok(extract(record)?.properties));
            map_fn(iterator, field, properties)
        }
        "ToString" => Ok(Box::new(move |record| {
            let node = extract(record)?;
            Ok(Value::String(render::to_display_string(&Value::Node(node))))
        })),
        _ => Err(PlanError::InvalidKey {
            field: field.name.clone(),
            key: element.key.clone(),
            kind: "Node".into(),
        }),
    }
}

fn relationship_fn(
    iterator: &mut PathIterator,
    field: &Field,
    extract: RelationshipFn,
) -> Result<ValueFn, PlanError> {
    let Some(element) = iterator.next_element() else {
        return Err(PlanError::MissingTerminal {
            field: field.name.clone(),
            kind: "a Relationship".into(),
        });
    };
    match element.key.as_str() {
        "ID" => Ok(Box::new(move |record| {
            let rel = extract(record)?;
            if rel.is_absent() {
                Ok(Value::Null)
            } else {
                Ok(Value::Int(rel.id))
            }
        })),
        "StartId" => Ok(Box::new(move |record| {
            let rel = extract(record)?;
            if rel.is_absent() {
                Ok(Value::Null)
            } else {
                Ok(Value::Int(rel.start_id))
            }
        })),
        "EndId" => Ok(Box::new(move |record| {
            let rel = extract(record)?;
            if rel.is_absent() {
                Ok(Value::Null)
            } else {
                Ok(Value::Int(rel.end_id))
            }
        })),
        "Type" => Ok(Box::new(move |record| {
            let rel = extract(record)?;
            if rel.is_absent() {
                Ok(Value::Null)
            } else {
                Ok(Value::String(rel.rel_type))
            }
        })),
        "Properties" => {
            let properties: MapFn = Box::new(move |record| Ok(extract(record)?.properties));
            map_fn(iterator, field, properties)
        }
        "ToString" => Ok(Box::new(move |record| {
            let rel = extract(record)?;
            Ok(Value::String(render::to_display_string(
                &Value::Relationship(rel),
            )))
        })),
        _ => Err(PlanError::InvalidKey {
            field: field.name.clone(),
            key: element.key.clone(),
            kind: "Relationship".into(),
        }),
    }
}

fn path_fn(
    iterator: &mut PathIterator,
    field: &Field,
    extract: PathFn,
) -> Result<ValueFn, PlanError> {
    let Some(element) = iterator.next_element() else {
        return Err(PlanError::MissingTerminal {
            field: field.name.clone(),
            kind: "a Path".into(),
        });
    };
    match element.key.as_str() {
        "Nodes" => {
            let nodes: ListFn = Box::new(move |record| {
                let path = extract(record)?;
                Ok(path.nodes.into_iter().map(Value::Node).collect())
            });
            list_fn(iterator, field, ElementKind::Node, nodes)
        }
        "Relationships" => {
            let relationships: ListFn = Box::new(move |record| {
                let path = extract(record)?;
                Ok(path
                    .relationships
                    .into_iter()
                    .map(Value::Relationship)
                    .collect())
            });
            list_fn(iterator, field, ElementKind::Relationship, relationships)
        }
        "ToString" => Ok(Box::new(move |record| {
            let path = extract(record)?;
            Ok(Value::String(render::to_display_string(&Value::Path(path))))
        })),
        _ => Err(PlanError::InvalidKey {
            field: field.name.clone(),
            key: element.key.clone(),
            kind: "Path".into(),
        }),
    }
}

fn list_fn(
    iterator: &mut PathIterator,
    field: &Field,
    elem: ElementKind,
    extract: ListFn,
) -> Result<ValueFn, PlanError> {
    let kind = ElementType::List(elem).to_string();
    let Some(element) = iterator.next_element() else {
        return Err(PlanError::MissingTerminal {
            field: field.name.clone(),
            kind: format!("a list of {elem}s"),
        });
    };
    match element.key.as_str() {
        "First" => {
            let key = element.key.clone();
            let pick: PickFn = Box::new(move |record| {
                let mut items = extract(record)?;
                if items.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(items.swap_remove(0)))
                }
            });
            element_fn(iterator, field, elem, key, pick)
        }
        "Last" => {
            let key = element.key.clone();
            let pick: PickFn = Box::new(move |record| Ok(extract(record)?.pop()));
            element_fn(iterator, field, elem, key, pick)
        }
        "Count" => Ok(Box::new(move |record| {
            Ok(Value::Int(extract(record)?.len() as i64))
        })),
        "Concatenate" => {
            if elem != ElementKind::Scalar(ScalarType::String) {
                return Err(PlanError::InvalidConcatenate {
                    field: field.name.clone(),
                    kind: elem.to_string(),
                });
            }
            let field_name = field.name.clone();
            let key = element.key.clone();
            Ok(Box::new(move |record| {
                let items = extract(record)?;
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => parts.push(s),
                        other => {
                            return Err(RowError::TypeMismatch {
                                field: field_name.clone(),
                                key: key.clone(),
                                expected: "String".into(),
                                actual: other.kind_name(),
                            })
                        }
                    }
                }
                Ok(Value::String(parts.join(",")))
            }))
        }
        key => {
            let Some(index_text) = key.strip_prefix("Index:").filter(|t| !t.is_empty()) else {
                return Err(PlanError::InvalidKey {
                    field: field.name.clone(),
                    key: key.to_string(),
                    kind,
                });
            };
            let Ok(index) = index_text.parse::<usize>() else {
                return Err(PlanError::InvalidIndex {
                    field: field.name.clone(),
                    key: key.to_string(),
                });
            };
            let key = key.to_string();
            let pick: PickFn = Box::new(move |record| {
                let mut items = extract(record)?;
                if index >= items.len() {
                    Ok(None)
                } else {
                    Ok(Some(items.swap_remove(index)))
                }
            });
            element_fn(iterator, field, elem, key, pick)
        }
    }
}

/// Continue compilation after a list pick (`First`, `Last`, `Index:<n>`).
///
/// An out-of-range pick yields `None`, which becomes null for scalars
/// and the absent sentinel for nodes and relationships, so the rest of
/// the chain behaves exactly like a defaulted optional match.
fn element_fn(
    iterator: &mut PathIterator,
    field: &Field,
    elem: ElementKind,
    key: String,
    pick: PickFn,
) -> Result<ValueFn, PlanError> {
    match elem {
        ElementKind::Scalar(_) => Ok(Box::new(move |record| {
            Ok(pick(record)?.unwrap_or(Value::Null))
        })),
        ElementKind::Node => {
            let field_name = field.name.clone();
            let extract: NodeFn = Box::new(move |record| match pick(record)? {
                None => Ok(Node::absent()),
                Some(Value::Node(node)) => Ok(node),
                Some(other) => Err(RowError::TypeMismatch {
                    field: field_name.clone(),
                    key: key.clone(),
                    expected: "Node".into(),
                    actual: other.kind_name(),
                }),
            });
            node_fn(iterator, field, extract)
        }
        ElementKind::Relationship => {
            let field_name = field.name.clone();
            let extract: RelationshipFn = Box::new(move |record| match pick(record)? {
                None => Ok(Relationship::absent()),
                Some(Value::Relationship(rel)) => Ok(rel),
                Some(other) => Err(RowError::TypeMismatch {
                    field: field_name.clone(),
                    key: key.clone(),
                    expected: "Relationship".into(),
                    actual: other.kind_name(),
                }),
            });
            relationship_fn(iterator, field, extract)
        }
    }
}

fn map_fn(iterator: &mut PathIterator, field: &Field, extract: MapFn) -> Result<ValueFn, PlanError> {
    let Some(element) = iterator.next_element() else {
        return Err(PlanError::MissingTerminal {
            field: field.name.clone(),
            kind: "a Map".into(),
        });
    };
    match element.data_type {
        ElementType::Scalar(_) => {
            let key = element.key.clone();
            Ok(Box::new(move |record| {
                Ok(extract(record)?.remove(&key).unwrap_or(Value::Null))
            }))
        }
        ElementType::List(elem) => {
            let key = element.key.clone();
            let field_name = field.name.clone();
            let list: ListFn = Box::new(move |record| {
                let mut map = extract(record)?;
                match map.remove(&key) {
                    None | Some(Value::Null) => Ok(Vec::new()),
                    Some(Value::List(items)) => Ok(items),
                    Some(other) => Err(RowError::MapValueMismatch {
                        field: field_name.clone(),
                        key: key.clone(),
                        expected: "list".into(),
                        actual: other.kind_name(),
                    }),
                }
            });
            list_fn(iterator, field, elem, list)
        }
        _ => Err(PlanError::InvalidMapType {
            field: field.name.clone(),
            data_type: element.data_type.to_string(),
        }),
    }
}

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

//! Path compilation and per-record extraction.

use rowgraph_core::{
    compile_field, ElementKind, ElementType, Field, Node, Path, PathElement, PlanError, Record,
    Relationship, ScalarType, Value,
};

fn field(name: &str, data_type: ScalarType, path: Vec<PathElement>) -> Field {
    Field {
        name: name.to_string(),
        data_type,
        path,
    }
}

fn scalar(key: &str, scalar: ScalarType) -> PathElement {
    PathElement::new(key, ElementType::Scalar(scalar))
}

fn list(key: &str, elem: ElementKind) -> PathElement {
    PathElement::new(key, ElementType::List(elem))
}

fn string_list(key: &str) -> PathElement {
    list(key, ElementKind::Scalar(ScalarType::String))
}

fn extract(field: &Field, record: &Record) -> Value {
    compile_field(field).unwrap()(record).unwrap()
}

fn sample_node() -> Node {
    Node::new(1)
        .with_label("Label1")
        .with_label("Label2")
        .with_property("Prop", "some value")
}

#[test]
fn scalar_path_reads_the_record_column() {
    let f = field("out", ScalarType::Integer, vec![scalar("n", ScalarType::Integer)]);
    let record = Record::new().with("n", 12i64);
    assert_eq!(extract(&f, &record), Value::Int(12));
}

#[test]
fn scalar_path_yields_null_for_absent_column() {
    let f = field("out", ScalarType::Integer, vec![scalar("n", ScalarType::Integer)]);
    assert_eq!(extract(&f, &Record::new()), Value::Null);
}

#[test]
fn node_id() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("node", ElementType::Node),
            scalar("ID", ScalarType::Integer),
        ],
    );
    let record = Record::new().with("node", Value::Node(sample_node()));
    assert_eq!(extract(&f, &record), Value::Int(1));
}

#[test]
fn absent_node_id_is_null() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("node", ElementType::Node),
            scalar("ID", ScalarType::Integer),
        ],
    );
    assert_eq!(extract(&f, &Record::new()), Value::Null);
}

#[test]
fn concatenated_node_labels() {
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("Concatenate", ScalarType::String),
        ],
    );
    let record = Record::new().with("node", Value::Node(sample_node()));
    assert_eq!(extract(&f, &record), Value::String("Label1,Label2".into()));
}

#[test]
fn concatenating_an_empty_label_list_yields_an_empty_string() {
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("Concatenate", ScalarType::String),
        ],
    );
    let record = Record::new().with("node", Value::Node(Node::new(1)));
    assert_eq!(extract(&f, &record), Value::String(String::new()));
}

#[test]
fn first_and_last_node_label() {
    let record = Record::new().with("node", Value::Node(sample_node()));
    let first = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("First", ScalarType::String),
        ],
    );
    assert_eq!(extract(&first, &record), Value::String("Label1".into()));
    let last = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("Last", ScalarType::String),
        ],
    );
    assert_eq!(extract(&last, &record), Value::String("Label2".into()));
}

#[test]
fn first_label_of_an_unlabeled_node_is_null() {
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("First", ScalarType::String),
        ],
    );
    let record = Record::new().with("node", Value::Node(Node::new(1)));
    assert_eq!(extract(&f, &record), Value::Null);
}

#[test]
fn label_count() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("Count", ScalarType::Integer),
        ],
    );
    let record = Record::new().with("node", Value::Node(sample_node()));
    assert_eq!(extract(&f, &record), Value::Int(2));
    assert_eq!(extract(&f, &Record::new()), Value::Int(0));
}

#[test]
fn indexed_label_in_and_out_of_range() {
    let record = Record::new().with("node", Value::Node(sample_node()));
    let in_range = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("Index:1", ScalarType::String),
        ],
    );
    assert_eq!(extract(&in_range, &record), Value::String("Label2".into()));
    let out_of_range = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            string_list("Labels"),
            scalar("Index:2", ScalarType::String),
        ],
    );
    assert_eq!(extract(&out_of_range, &record), Value::Null);
}

#[test]
fn node_property_lookup() {
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            PathElement::new("Properties", ElementType::Map),
            scalar("Prop", ScalarType::String),
        ],
    );
    let record = Record::new().with("node", Value::Node(sample_node()));
    assert_eq!(extract(&f, &record), Value::String("some value".into()));
}

#[test]
fn missing_node_property_is_null() {
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            PathElement::new("Properties", ElementType::Map),
            scalar("Nope", ScalarType::String),
        ],
    );
    let record = Record::new().with("node", Value::Node(sample_node()));
    assert_eq!(extract(&f, &record), Value::Null);
}

#[test]
fn node_string_list_property() {
    let node = Node::new(1).with_property(
        "Tags",
        Value::List(vec![Value::String("a".into()), Value::String("b".into())]),
    );
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            PathElement::new("Properties", ElementType::Map),
            string_list("Tags"),
            scalar("Concatenate", ScalarType::String),
        ],
    );
    let record = Record::new().with("node", Value::Node(node));
    assert_eq!(extract(&f, &record), Value::String("a,b".into()));
}

#[test]
fn scalar_map_entry_where_a_list_was_declared_is_a_row_error() {
    let node = Node::new(1).with_property("Tags", 3i64);
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("node", ElementType::Node),
            PathElement::new("Properties", ElementType::Map),
            string_list("Tags"),
            scalar("Concatenate", ScalarType::String),
        ],
    );
    let record = Record::new().with("node", Value::Node(node));
    let err = compile_field(&f).unwrap()(&record).unwrap_err();
    assert_eq!(
        err.to_string(),
        "map value with key 'Tags' on field 'out' is not a list; it is Integer"
    );
}

#[test]
fn wrong_shaped_record_value_is_a_row_error() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("node", ElementType::Node),
            scalar("ID", ScalarType::Integer),
        ],
    );
    let record = Record::new().with("node", "not a node");
    let err = compile_field(&f).unwrap()(&record).unwrap_err();
    assert_eq!(
        err.to_string(),
        "path key 'node' for field 'out' is not a Node, but is String"
    );
}

#[test]
fn relationship_id_start_end_type() {
    let rel = Relationship::new(7, 10, 11, "KNOWS");
    let record = Record::new().with("rel", Value::Relationship(rel));
    for (key, expected) in [
        ("ID", Value::Int(7)),
        ("StartId", Value::Int(10)),
        ("EndId", Value::Int(11)),
        ("Type", Value::String("KNOWS".into())),
    ] {
        let f = field(
            "out",
            ScalarType::Integer,
            vec![
                PathElement::new("rel", ElementType::Relationship),
                scalar(key, ScalarType::Integer),
            ],
        );
        assert_eq!(extract(&f, &record), expected, "key {key}");
    }
}

#[test]
fn absent_relationship_terminals_are_null() {
    for key in ["ID", "StartId", "EndId", "Type"] {
        let f = field(
            "out",
            ScalarType::Integer,
            vec![
                PathElement::new("rel", ElementType::Relationship),
                scalar(key, ScalarType::Integer),
            ],
        );
        assert_eq!(extract(&f, &Record::new()), Value::Null, "key {key}");
    }
}

#[test]
fn relationship_property_lookup() {
    let rel = Relationship::new(7, 10, 11, "KNOWS").with_property("since", 1999i64);
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("rel", ElementType::Relationship),
            PathElement::new("Properties", ElementType::Map),
            scalar("since", ScalarType::Integer),
        ],
    );
    let record = Record::new().with("rel", Value::Relationship(rel));
    assert_eq!(extract(&f, &record), Value::Int(1999));
}

#[test]
fn relationship_to_string() {
    let rel = Relationship::new(7, 10, 11, "KNOWS");
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("rel", ElementType::Relationship),
            scalar("ToString", ScalarType::String),
        ],
    );
    let record = Record::new().with("rel", Value::Relationship(rel));
    assert_eq!(extract(&f, &record), Value::String("[:KNOWS]".into()));
}

fn sample_path() -> Path {
    Path {
        nodes: vec![Node::new(1).with_label("A"), Node::new(2).with_label("B")],
        relationships: vec![Relationship::new(9, 1, 2, "A_to_B")],
    }
}

#[test]
fn path_node_picks() {
    let record = Record::new().with("path", Value::Path(sample_path()));
    for (key, expected) in [
        ("First", Value::Int(1)),
        ("Last", Value::Int(2)),
        ("Index:1", Value::Int(2)),
        ("Index:5", Value::Null),
    ] {
        let f = field(
            "out",
            ScalarType::Integer,
            vec![
                PathElement::new("path", ElementType::Path),
                list("Nodes", ElementKind::Node),
                PathElement::new(key, ElementType::Node),
                scalar("ID", ScalarType::Integer),
            ],
        );
        assert_eq!(extract(&f, &record), expected, "key {key}");
    }
}

#[test]
fn path_node_and_relationship_counts() {
    let record = Record::new().with("path", Value::Path(sample_path()));
    let nodes = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("path", ElementType::Path),
            list("Nodes", ElementKind::Node),
            scalar("Count", ScalarType::Integer),
        ],
    );
    assert_eq!(extract(&nodes, &record), Value::Int(2));
    let rels = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("path", ElementType::Path),
            list("Relationships", ElementKind::Relationship),
            scalar("Count", ScalarType::Integer),
        ],
    );
    assert_eq!(extract(&rels, &record), Value::Int(1));
}

#[test]
fn path_relationship_pick_reaches_its_terminals() {
    let f = field(
        "out",
        ScalarType::String,
        vec![
            PathElement::new("path", ElementType::Path),
            list("Relationships", ElementKind::Relationship),
            PathElement::new("First", ElementType::Relationship),
            scalar("Type", ScalarType::String),
        ],
    );
    let record = Record::new().with("path", Value::Path(sample_path()));
    assert_eq!(extract(&f, &record), Value::String("A_to_B".into()));
}

#[test]
fn top_level_scalar_lists() {
    let values = Value::List(vec![Value::Int(3), Value::Int(5), Value::Int(8)]);
    let record = Record::new().with("ints", values);
    for (key, expected) in [
        ("First", Value::Int(3)),
        ("Last", Value::Int(8)),
        ("Index:1", Value::Int(5)),
        ("Count", Value::Int(3)),
    ] {
        let f = field(
            "out",
            ScalarType::Integer,
            vec![
                list("ints", ElementKind::Scalar(ScalarType::Integer)),
                scalar(key, ScalarType::Integer),
            ],
        );
        assert_eq!(extract(&f, &record), expected, "key {key}");
    }
}

#[test]
fn concatenate_top_level_string_list() {
    let record = Record::new().with(
        "strs",
        Value::List(vec![Value::String("x".into()), Value::String("y".into())]),
    );
    let f = field(
        "out",
        ScalarType::String,
        vec![string_list("strs"), scalar("Concatenate", ScalarType::String)],
    );
    assert_eq!(extract(&f, &record), Value::String("x,y".into()));
}

#[test]
fn empty_path_rejected() {
    let f = field("out", ScalarType::Integer, vec![]);
    let err = compile_field(&f).err().unwrap();
    assert_eq!(err.to_string(), "no path was provided for field 'out'");
}

#[test]
fn structural_terminal_rejected() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![PathElement::new("node", ElementType::Node)],
    );
    let err = compile_field(&f).err().unwrap();
    assert_eq!(
        err.to_string(),
        "the path for field 'out' ends in a Node and not in a property data type"
    );
}

#[test]
fn unknown_node_key_rejected() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("node", ElementType::Node),
            scalar("Bogus", ScalarType::Integer),
        ],
    );
    assert!(matches!(
        compile_field(&f).err().unwrap(),
        PlanError::InvalidKey { key, .. } if key == "Bogus"
    ));
}

#[test]
fn unparseable_list_index_rejected() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            list("ints", ElementKind::Scalar(ScalarType::Integer)),
            scalar("Index:x", ScalarType::Integer),
        ],
    );
    assert!(matches!(
        compile_field(&f).err().unwrap(),
        PlanError::InvalidIndex { key, .. } if key == "Index:x"
    ));
}

#[test]
fn negative_list_index_rejected() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            list("ints", ElementKind::Scalar(ScalarType::Integer)),
            scalar("Index:-1", ScalarType::Integer),
        ],
    );
    assert!(matches!(
        compile_field(&f).err().unwrap(),
        PlanError::InvalidIndex { .. }
    ));
}

#[test]
fn concatenate_requires_a_string_list() {
    let f = field(
        "out",
        ScalarType::String,
        vec![
            list("ints", ElementKind::Scalar(ScalarType::Integer)),
            scalar("Concatenate", ScalarType::String),
        ],
    );
    assert!(matches!(
        compile_field(&f).err().unwrap(),
        PlanError::InvalidConcatenate { .. }
    ));
}

#[test]
fn map_cannot_hold_structural_values() {
    let f = field(
        "out",
        ScalarType::Integer,
        vec![
            PathElement::new("node", ElementType::Node),
            PathElement::new("Properties", ElementType::Map),
            PathElement::new("inner", ElementType::Node),
            scalar("ID", ScalarType::Integer),
        ],
    );
    assert!(matches!(
        compile_field(&f).err().unwrap(),
        PlanError::InvalidMapType { .. }
    ));
}

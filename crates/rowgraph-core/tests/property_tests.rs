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

//! Property-based tests for path compilation and extraction.
//!
//! These tests verify invariants that should hold for all inputs:
//! - indexed list picks never panic and agree with direct indexing
//! - compilation of malformed paths fails without panicking
//! - rendering is total over arbitrary node shapes

use proptest::prelude::*;
use rowgraph_core::{
    compile_field, to_display_string, ElementKind, ElementType, Field, Node, PathElement, Record,
    ScalarType, Value,
};

fn int_list_field(key: &str, index: usize) -> Field {
    Field {
        name: "out".to_string(),
        data_type: ScalarType::Integer,
        path: vec![
            PathElement::new(key, ElementType::List(ElementKind::Scalar(ScalarType::Integer))),
            PathElement::new(
                format!("Index:{index}"),
                ElementType::Scalar(ScalarType::Integer),
            ),
        ],
    }
}

proptest! {
    /// An indexed pick is the list element when in range, null when not.
    #[test]
    fn prop_indexed_pick_matches_direct_indexing(
        items in proptest::collection::vec(any::<i64>(), 0..16),
        index in 0usize..24,
    ) {
        let field = int_list_field("xs", index);
        let extractor = compile_field(&field).unwrap();
        let record = Record::new().with(
            "xs",
            Value::List(items.iter().copied().map(Value::Int).collect()),
        );
        let extracted = extractor(&record).unwrap();
        match items.get(index) {
            Some(&n) => prop_assert_eq!(extracted, Value::Int(n)),
            None => prop_assert_eq!(extracted, Value::Null),
        }
    }

    /// First and Last agree with the ends of the list.
    #[test]
    fn prop_first_and_last_match_the_ends(
        items in proptest::collection::vec(any::<i64>(), 1..16),
    ) {
        let record = Record::new().with(
            "xs",
            Value::List(items.iter().copied().map(Value::Int).collect()),
        );
        for (key, expected) in [("First", items[0]), ("Last", *items.last().unwrap())] {
            let field = Field {
                name: "out".to_string(),
                data_type: ScalarType::Integer,
                path: vec![
                    PathElement::new(
                        "xs",
                        ElementType::List(ElementKind::Scalar(ScalarType::Integer)),
                    ),
                    PathElement::new(key, ElementType::Scalar(ScalarType::Integer)),
                ],
            };
            let extracted = compile_field(&field).unwrap()(&record).unwrap();
            prop_assert_eq!(extracted, Value::Int(expected));
        }
    }

    /// A path that stops at a structural element always fails to
    /// compile, for any field name, and never panics.
    #[test]
    fn prop_structural_terminal_never_compiles(name in "[a-zA-Z0-9_]{1,12}") {
        for data_type in [ElementType::Node, ElementType::Relationship, ElementType::Path, ElementType::Map] {
            let field = Field {
                name: name.clone(),
                data_type: ScalarType::String,
                path: vec![PathElement::new("k", data_type)],
            };
            prop_assert!(compile_field(&field).is_err());
        }
    }

    /// Node rendering is total and always parenthesized.
    #[test]
    fn prop_node_rendering_is_total(
        labels in proptest::collection::vec("[a-zA-Z0-9_]{0,8}", 0..4),
        key in "[a-zA-Z0-9]{0,8}",
        prop_value in any::<i64>(),
    ) {
        let mut node = Node::new(1);
        for label in labels {
            node = node.with_label(label);
        }
        if !key.is_empty() {
            node = node.with_property(key, prop_value);
        }
        let rendered = to_display_string(&Value::Node(node));
        prop_assert!(rendered.starts_with('('));
        prop_assert!(rendered.ends_with(')'));
    }
}
